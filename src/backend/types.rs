//! Shared types for backend communication

use serde::{Deserialize, Serialize};

/// One search match as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageHit {
    pub image_path: String,
    pub caption: String,
}

/// Render-ready record: resolved image URL plus its caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub url: String,
    pub caption: String,
}

impl ImageHit {
    /// Resolve the server-relative `image_path` against the image base URL.
    ///
    /// The path is taken verbatim; the backend serves paths that are
    /// already URL-safe.
    pub fn into_record(self, image_base_url: &str) -> ImageRecord {
        ImageRecord {
            url: format!("{}/{}", image_base_url.trim_end_matches('/'), self.image_path),
            caption: self.caption,
        }
    }
}
