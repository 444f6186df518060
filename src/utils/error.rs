use std::fmt;
use thiserror::Error;

/// 單一請求失敗的錯誤形狀：狀態碼、訊息、原始錯誤。
///
/// Transport failures (connection refused, DNS, timeouts from the transport
/// default) carry no status. Non-2xx responses carry the status and the raw
/// response body. Neither case is retried or reinterpreted.
#[derive(Debug)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<String>,
    pub source: Option<reqwest::Error>,
}

impl ApiError {
    pub fn from_status(status: u16, body: String) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {}", status),
            body: if body.is_empty() { None } else { Some(body) },
            source: None,
        }
    }

    pub fn is_status(&self) -> bool {
        self.status.is_some()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            body: None,
            source: Some(err),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AdminError {
    /// CLI 退出碼：HTTP 狀態錯誤 2，傳輸錯誤 3，其他 1
    pub fn exit_code(&self) -> i32 {
        match self {
            AdminError::Api(e) if e.is_status() => 2,
            AdminError::Api(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::from_status(404, "not found".to_string());
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "Request failed with status code 404");
        assert_eq!(err.body.as_deref(), Some("not found"));
    }

    #[test]
    fn test_empty_body_is_none() {
        let err = ApiError::from_status(500, String::new());
        assert!(err.body.is_none());
    }

    #[test]
    fn test_exit_codes() {
        let status: AdminError = ApiError::from_status(400, String::new()).into();
        assert_eq!(status.exit_code(), 2);

        let transport = AdminError::Api(ApiError {
            status: None,
            message: "connection refused".to_string(),
            body: None,
            source: None,
        });
        assert_eq!(transport.exit_code(), 3);

        let config = AdminError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
    }
}
