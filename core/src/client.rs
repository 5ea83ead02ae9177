//! reqwest-backed [`Backend`] for native builds.

use crate::backend::Backend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = config.base()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base,
            token: config.token.clone(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }
}

impl Backend for HttpBackend {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        debug!(%url, "GET");

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let value = response.json::<Value>().await?;
        Ok(value)
    }
}
