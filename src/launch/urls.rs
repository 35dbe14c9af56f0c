use std::path::Path;

use serde_json::Value;

use crate::config;
use crate::error::{AppError, AppResult};

/// Loads a JSON array of objects and returns every `url` it carries.
pub fn load_urls(path: &Path) -> AppResult<Vec<String>> {
    let document: Value = config::read_json_file(path)?;
    let urls = extract_urls(&document).map_err(|err| match err {
        AppError::MalformedInput(_) => {
            AppError::MalformedInput(format!("file in wrong format: {}", path.display()))
        }
        other => other,
    })?;

    if urls.is_empty() {
        return Err(AppError::NoUrlsFound(path.to_path_buf()));
    }

    Ok(urls)
}

/// Entries without a string `url` are skipped.
pub fn extract_urls(document: &Value) -> AppResult<Vec<String>> {
    let entries = document
        .as_array()
        .ok_or_else(|| AppError::MalformedInput("expected a JSON array".to_string()))?;

    let urls = entries
        .iter()
        .filter_map(|entry| match entry.get("url") {
            Some(Value::String(url)) => Some(url.clone()),
            Some(other) => {
                tracing::warn!(url = %other, "skipping non-string url");
                None
            }
            None => None,
        })
        .collect();

    Ok(urls)
}
