#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::AdminConfig;

use std::env;

/// 環境變數名稱：覆寫 API base URL
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.svrve.com";

/// Local development API host.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:9090";

/// Pick the base URL: a non-empty override wins, otherwise the default.
///
/// The override is returned verbatim; a malformed URL only shows up when a
/// request built on it fails.
pub fn resolve_base_url(override_value: Option<&str>) -> String {
    match override_value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// 從環境變數讀取一次，缺少或空值時使用預設值
    pub fn from_env() -> Self {
        let value = env::var(BASE_URL_ENV).ok();
        Self::resolve(value.as_deref())
    }

    pub fn resolve(override_value: Option<&str>) -> Self {
        Self {
            base_url: resolve_base_url(override_value),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
