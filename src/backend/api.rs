//! HTTP client for Python backend API

use reqwest::Client;

use super::types::{ImageHit, ImageRecord};

/// Failure while talking to the backend
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Client for communicating with the Python FastAPI backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    search_url: String,
    image_base_url: String,
}

impl BackendClient {
    pub fn new(search_url: &str, image_base_url: &str) -> Self {
        Self {
            client: Client::new(),
            search_url: search_url.trim_end_matches('/').to_string(),
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run a semantic search and resolve each hit into a render-ready record.
    ///
    /// The term travels as a single percent-encoded `query` parameter.
    pub async fn search(&self, term: &str) -> Result<Vec<ImageRecord>, ApiError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("query", term)])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let hits: Vec<ImageHit> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(hits
            .into_iter()
            .map(|hit| hit.into_record(&self.image_base_url))
            .collect())
    }

    /// Fetch the raw bytes of one served image
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
