use gloo_net::http::Request;
use serde_json::Value;
use stockroom_core::{ApiError, Backend, Store};

pub const API_BASE: &str = "/api";

pub type AppStore = Store<GlooBackend>;

/// Browser fetch backend; paths are appended to a base such as `/api`.
#[derive(Debug, Clone)]
pub struct GlooBackend {
    base: String,
}

impl GlooBackend {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Backend for GlooBackend {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::get(&format!("{}{}", self.base, path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
