//! Resource services: one stateless group of operations per remote resource.
//!
//! Every operation issues exactly one request through the shared
//! [`ApiClient`] and hands back the response body, or the [`ApiError`]
//! untouched.
//!
//! [`ApiError`]: crate::utils::error::ApiError

pub mod blogs;
pub mod faqs;
pub mod orders;
pub mod products;

pub use blogs::BlogService;
pub use faqs::FaqService;
pub use orders::OrderService;
pub use products::ProductService;

use crate::config::ApiConfig;
use crate::core::{ApiClient, ApiResult};

/// All four services wired to one client.
#[derive(Debug, Clone)]
pub struct AdminApi {
    pub products: ProductService,
    pub orders: OrderService,
    pub faqs: FaqService,
    pub blogs: BlogService,
}

impl AdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            products: ProductService::new(client.clone()),
            orders: OrderService::new(client.clone()),
            faqs: FaqService::new(client.clone()),
            blogs: BlogService::new(client),
        }
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Ok(Self::new(ApiClient::new(config)?))
    }
}
