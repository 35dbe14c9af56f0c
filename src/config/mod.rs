pub mod paths;
pub mod settings;

pub use paths::{AppPaths, BrowserPaths};
pub use settings::Settings;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(paths.settings_file())
}

/// Reads and parses a JSON document, mapping each failure to the file-level
/// error that names the path.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    if !path.exists() {
        return Err(AppError::MissingFile(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(AppError::IsDirectory(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = read_json_file::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, AppError::MissingFile(p) if p == path));
    }

    #[test]
    fn reports_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_json_file::<serde_json::Value>(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::IsDirectory(_)));
    }

    #[test]
    fn reports_unparsable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("write");
        let err = read_json_file::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, AppError::ParseFile { .. }));
    }
}
