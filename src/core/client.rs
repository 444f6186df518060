use crate::config::ApiConfig;
use crate::utils::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// The one HTTP client every resource service shares.
///
/// Built once from the resolved base URL with `Content-Type: application/json`
/// and `Accept: */*` as default headers. Cloning is cheap and shares the
/// underlying connection pool; nothing on it is mutated after construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// 組合 base URL 與相對路徑
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send(self.client.get(self.url(path))).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send(self.client.delete(self.url(path))).await
    }

    /// Multipart POST. The request-level multipart content type (with its
    /// boundary) replaces the default JSON content type for this call only.
    pub async fn post_multipart(&self, path: &str, form: Form) -> ApiResult<Value> {
        let request = self
            .client
            .post(self.url(path))
            .header(ACCEPT, "*/*")
            .multipart(form);
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Value> {
        let request = request.build()?;
        tracing::debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request).await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            // body 讀取失敗時仍保留原始狀態碼
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        let text = response.text().await?;
        Ok(parse_body(text))
    }
}

/// 成功回應原樣返回：JSON 解析成 Value，非 JSON 保留文字，空 body 為 Null
fn parse_body(text: String) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base_url)).unwrap()
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        assert_eq!(
            client("http://localhost:9090").url("/orders/42"),
            "http://localhost:9090/orders/42"
        );
        assert_eq!(
            client("http://localhost:9090/").url("/faqs"),
            "http://localhost:9090/faqs"
        );
        assert_eq!(
            client("http://localhost:9090/api").url("blog"),
            "http://localhost:9090/api/blog"
        );
    }

    #[test]
    fn test_parse_body_json() {
        assert_eq!(
            parse_body(r#"{"id":1,"name":"vase"}"#.to_string()),
            json!({"id": 1, "name": "vase"})
        );
    }

    #[test]
    fn test_parse_body_plain_text() {
        assert_eq!(
            parse_body("Deleted".to_string()),
            Value::String("Deleted".to_string())
        );
    }

    #[test]
    fn test_parse_body_empty() {
        assert_eq!(parse_body(String::new()), Value::Null);
    }
}
