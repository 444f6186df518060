pub mod bootstrap;
pub mod client;

pub use crate::domain::model::{ImageFile, UploadForm, UploadImage};
pub use crate::domain::ports::Host;
pub use crate::utils::error::{ApiError, ApiResult};
pub use client::ApiClient;
