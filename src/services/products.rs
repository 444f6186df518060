use crate::core::{ApiClient, ApiResult, ImageFile, UploadImage};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// Products, their lookup lists, image uploads and SEO records.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: ApiClient,
}

impl ProductService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_product<B: Serialize + ?Sized>(&self, product: &B) -> ApiResult<Value> {
        self.client.post("/create", product).await
    }

    pub async fn get_benefits(&self) -> ApiResult<Value> {
        self.client.get("/benefits").await
    }

    pub async fn get_love_points(&self) -> ApiResult<Value> {
        self.client.get("/lovePoints").await
    }

    pub async fn get_product_details(&self) -> ApiResult<Value> {
        self.client.get("/productDetails").await
    }

    pub async fn get_discounts(&self) -> ApiResult<Value> {
        self.client.get("/discounts").await
    }

    pub async fn upload_image(
        &self,
        ceremic_id: impl Display,
        file: ImageFile,
        is_catalog_image: Option<bool>,
    ) -> ApiResult<Value> {
        let upload = UploadImage::new(ceremic_id, file, is_catalog_image);
        self.client
            .post_multipart("/upload", multipart_form(upload)?)
            .await
    }

    pub async fn create_product_seo<B: Serialize + ?Sized>(&self, seo: &B) -> ApiResult<Value> {
        self.client.post("/product-seo", seo).await
    }

    pub async fn update_product_seo<B: Serialize + ?Sized>(
        &self,
        seo_id: impl Display,
        seo: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("/product-seo/{}", seo_id), seo).await
    }

    pub async fn get_products(&self) -> ApiResult<Value> {
        self.client.get("/collections").await
    }

    pub async fn get_product_seo_by_product_id(
        &self,
        product_id: impl Display,
    ) -> ApiResult<Value> {
        self.client
            .get(&format!("/product-seo/product/{}", product_id))
            .await
    }
}

fn multipart_form(upload: UploadImage) -> ApiResult<Form> {
    let UploadImage { file, form: fields } = upload;

    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(mime) = &file.mime {
        part = part.mime_str(mime)?;
    }

    let mut form = Form::new().part("file", part);
    for (name, value) in fields.text_fields() {
        form = form.text(name, value.to_string());
    }
    Ok(form)
}
