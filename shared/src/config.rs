//! Runtime configuration: where the API lives and which Basic credentials
//! every `/api` request carries.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tried first in debug builds
pub const DEV_CONFIG_URL: &str = "assets/config/config.dev.json";
pub const CONFIG_URL: &str = "assets/config/config.json";

/// Path prefix used when no absolute API URL applies
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub api_credentials: ApiCredentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build from optional values, typically `option_env!` at compile time
    pub fn from_parts(api_url: Option<&str>, username: Option<&str>, password: Option<&str>) -> Self {
        Self {
            api_credentials: ApiCredentials {
                username: username.unwrap_or_default().to_string(),
                password: password.unwrap_or_default().to_string(),
            },
            api_url: api_url.filter(|url| !url.is_empty()).map(str::to_string),
        }
    }

    /// False only when both username and password are empty
    pub fn has_credentials(&self) -> bool {
        !(self.api_credentials.username.is_empty() && self.api_credentials.password.is_empty())
    }

    /// Keep this config unless it carries no credentials at all
    pub fn or_fallback(self, fallback: AppConfig) -> AppConfig {
        if self.has_credentials() {
            self
        } else {
            fallback
        }
    }

    /// `{api_url}/api` for release builds with a known URL, `/api` otherwise
    /// (development goes through the dev server proxy).
    pub fn api_base_url(&self, production: bool) -> String {
        match self.api_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) if production => format!("{}{}", url.trim_end_matches('/'), DEFAULT_API_BASE),
            _ => DEFAULT_API_BASE.to_string(),
        }
    }

    /// Value of the `Authorization` header for API requests
    pub fn authorization_header(&self) -> String {
        let ApiCredentials { username, password } = &self.api_credentials;
        format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
    }
}

/// Whether a request URL gets the Basic credentials
pub fn requires_api_auth(url: &str) -> bool {
    url.contains(DEFAULT_API_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let config = AppConfig::from_json(
            r#"{"apiCredentials":{"username":"shop","password":"s3cret"},"apiUrl":"https://api.example.com"}"#,
        )
        .unwrap();
        assert_eq!(config.api_credentials.username, "shop");
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));

        let partial = AppConfig::from_json(r#"{"apiCredentials":{}}"#).unwrap();
        assert!(!partial.has_credentials());

        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_empty_credentials_fall_back() {
        let fallback = AppConfig::from_parts(None, Some("env-user"), Some("env-pass"));

        let empty = AppConfig::from_json(r#"{"apiCredentials":{"username":"","password":""}}"#).unwrap();
        assert_eq!(empty.or_fallback(fallback.clone()), fallback);

        let only_user = AppConfig::from_parts(None, Some("shop"), None);
        assert_eq!(only_user.clone().or_fallback(fallback), only_user);
    }

    #[test]
    fn test_api_base_url() {
        let config = AppConfig::from_parts(Some("https://api.example.com/"), None, None);
        assert_eq!(config.api_base_url(true), "https://api.example.com/api");
        assert_eq!(config.api_base_url(false), "/api");

        let no_url = AppConfig::from_parts(Some(""), None, None);
        assert_eq!(no_url.api_url, None);
        assert_eq!(no_url.api_base_url(true), "/api");
    }

    #[test]
    fn test_authorization_header() {
        let config = AppConfig::from_parts(None, Some("Aladdin"), Some("open sesame"));
        assert_eq!(config.authorization_header(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn test_requires_api_auth() {
        assert!(requires_api_auth("/api/Usuarios"));
        assert!(requires_api_auth("https://api.example.com/api/Auth/login"));
        assert!(!requires_api_auth("assets/config/config.json"));
    }
}
