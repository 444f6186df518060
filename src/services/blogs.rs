use crate::core::{ApiClient, ApiResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// Blog posts: create, update and read. The API has no delete.
#[derive(Debug, Clone)]
pub struct BlogService {
    client: ApiClient,
}

impl BlogService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_blog<B: Serialize + ?Sized>(&self, blog: &B) -> ApiResult<Value> {
        self.client.post("/blog", blog).await
    }

    pub async fn update_blog<B: Serialize + ?Sized>(
        &self,
        blog_id: impl Display,
        blog: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("/blog/{}", blog_id), blog).await
    }

    pub async fn get_blogs(&self) -> ApiResult<Value> {
        self.client.get("/blog").await
    }

    pub async fn get_blog_by_id(&self, blog_id: impl Display) -> ApiResult<Value> {
        self.client.get(&format!("/blog/{}", blog_id)).await
    }
}
