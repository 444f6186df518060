pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{resolve_base_url, AdminConfig, ApiConfig};
pub use crate::core::bootstrap::{bootstrap, MemoryHost, MountOutcome};
pub use crate::core::{ApiClient, Host, ImageFile, UploadForm, UploadImage};
pub use services::{AdminApi, BlogService, FaqService, OrderService, ProductService};
pub use utils::error::{AdminError, ApiError, ApiResult, Result};
