use crate::core::{ApiClient, ApiResult};
use serde_json::Value;
use std::fmt::Display;

/// Orders are read-only from the admin side.
#[derive(Debug, Clone)]
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_orders(&self) -> ApiResult<Value> {
        self.client.get("/orders").await
    }

    pub async fn get_order_by_id(&self, order_id: impl Display) -> ApiResult<Value> {
        self.client.get(&format!("/orders/{}", order_id)).await
    }
}
