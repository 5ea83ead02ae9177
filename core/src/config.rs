use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API; collection paths are joined under it.
    pub base_url: String,
    /// Sent as `Authorization: Token <token>` when present.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Read `STOCKROOM_API_URL`, `STOCKROOM_API_TOKEN` and
    /// `STOCKROOM_TIMEOUT_SECS`, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("STOCKROOM_API_URL").unwrap_or(defaults.base_url),
            token: non_empty("STOCKROOM_API_TOKEN"),
            timeout_secs: non_empty("STOCKROOM_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The base URL with a trailing slash, so relative joins keep any path
    /// prefix such as `/api`.
    pub fn base(&self) -> Result<Url, ApiError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(raw));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_env_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("STOCKROOM_API_URL", "https://erp.example.com/api"),
            ("STOCKROOM_API_TOKEN", "abc123"),
            ("STOCKROOM_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "https://erp.example.com/api");
        assert_eq!(config.token.as_deref(), Some("abc123"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_bad_timeout_and_blank_token() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("STOCKROOM_API_TOKEN", "  "),
            ("STOCKROOM_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.token, None);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_base_keeps_prefix() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api".to_string(),
            ..ApiConfig::default()
        };
        let base = config.base().unwrap();
        assert_eq!(base.as_str(), "http://localhost:8000/api/");
        assert_eq!(
            base.join("suppliers/").unwrap().as_str(),
            "http://localhost:8000/api/suppliers/"
        );
    }

    #[test]
    fn test_base_rejects_garbage() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(config.base(), Err(ApiError::InvalidUrl(_))));
    }
}
