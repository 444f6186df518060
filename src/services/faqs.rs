use crate::core::{ApiClient, ApiResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct FaqService {
    client: ApiClient,
}

impl FaqService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_faqs(&self) -> ApiResult<Value> {
        self.client.get("/faqs").await
    }

    pub async fn create_faq<B: Serialize + ?Sized>(&self, faq: &B) -> ApiResult<Value> {
        self.client.post("/faqs", faq).await
    }

    pub async fn update_faq<B: Serialize + ?Sized>(
        &self,
        faq_id: impl Display,
        faq: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("/faqs/{}", faq_id), faq).await
    }

    pub async fn delete_faq(&self, faq_id: impl Display) -> ApiResult<Value> {
        self.client.delete(&format!("/faqs/{}", faq_id)).await
    }
}
