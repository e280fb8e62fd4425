//! Backend endpoint configuration
//!
//! Both addresses default to the local Python backend and can be overridden
//! through the environment, the same way log filtering is.

use once_cell::sync::Lazy;

pub const SEARCH_URL_ENV: &str = "IMAGEFINDER_SEARCH_URL";
pub const IMAGE_URL_ENV: &str = "IMAGEFINDER_IMAGE_URL";

const DEFAULT_SEARCH_URL: &str = "http://localhost:8000/search";
const DEFAULT_IMAGE_URL: &str = "http://localhost:8000/images";

static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

/// Resolved endpoint addresses, fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint, queried with a `query` parameter
    pub search_url: String,
    /// Base address the backend serves image files under
    pub image_url: String,
}

impl Config {
    pub fn get() -> &'static Config {
        &CONFIG
    }

    fn from_env() -> Self {
        Self {
            search_url: value_or(std::env::var(SEARCH_URL_ENV).ok(), DEFAULT_SEARCH_URL),
            image_url: value_or(std::env::var(IMAGE_URL_ENV).ok(), DEFAULT_IMAGE_URL),
        }
    }
}

fn value_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_falls_back_to_default() {
        assert_eq!(value_or(None, DEFAULT_SEARCH_URL), DEFAULT_SEARCH_URL);
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        assert_eq!(
            value_or(Some("   ".to_string()), DEFAULT_IMAGE_URL),
            DEFAULT_IMAGE_URL
        );
    }

    #[test]
    fn test_set_value_wins() {
        assert_eq!(
            value_or(Some("http://10.0.0.2:9000/search".to_string()), DEFAULT_SEARCH_URL),
            "http://10.0.0.2:9000/search"
        );
    }
}
