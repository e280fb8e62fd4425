//! Saving fetched images to the user's Downloads directory

use std::path::PathBuf;

/// Derive a file name from the last path segment of an image URL.
///
/// Served paths never carry query strings, so the segment is used as-is.
pub fn file_name_for(url: &str) -> String {
    let name = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        "image".to_string()
    } else {
        name.to_string()
    }
}

/// Write image bytes into the Downloads directory, named after the URL.
pub async fn save_to_downloads(url: &str, bytes: Vec<u8>) -> Result<PathBuf, String> {
    let dir = dirs::download_dir().ok_or_else(|| "no Downloads directory on this system".to_string())?;
    let path = dir.join(file_name_for(url));

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| format!("could not write {}: {}", path.display(), e))?;

    tracing::info!("Saved image to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_last_segment() {
        assert_eq!(
            file_name_for("http://localhost:8000/images/cat.png"),
            "cat.png"
        );
    }

    #[test]
    fn test_nested_path_keeps_only_final_segment() {
        assert_eq!(
            file_name_for("http://localhost:8000/images/pets/2024/dog.jpg"),
            "dog.jpg"
        );
    }

    #[test]
    fn test_degenerate_url_gets_fallback_name() {
        assert_eq!(file_name_for("http://localhost:8000/"), "image");
        assert_eq!(file_name_for(""), "image");
    }
}
