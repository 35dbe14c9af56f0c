use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

const DEFAULT_OPEN_PROFILE: &str = "work";

#[cfg(target_os = "macos")]
const DEFAULT_BROWSER_BINARY: &str = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";
#[cfg(target_os = "windows")]
const DEFAULT_BROWSER_BINARY: &str = "chrome.exe";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_BROWSER_BINARY: &str = "google-chrome";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub chrome_dir: Option<PathBuf>,
    #[serde(default)]
    pub browser_binary: Option<String>,
    #[serde(default)]
    pub open_profile: Option<String>,
}

impl Settings {
    pub fn browser_binary(&self) -> String {
        self.browser_binary
            .clone()
            .unwrap_or_else(|| DEFAULT_BROWSER_BINARY.to_string())
    }

    /// Profile used by `open` when `--user` is not given.
    pub fn open_profile(&self) -> String {
        self.open_profile
            .clone()
            .unwrap_or_else(|| DEFAULT_OPEN_PROFILE.to_string())
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    super::read_json_file(&path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = load(dir.path().join("config.json")).expect("load should work");
        assert_eq!(settings.open_profile(), "work");
        assert_eq!(settings.browser_binary(), DEFAULT_BROWSER_BINARY);
    }

    #[test]
    fn reads_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"browser_binary": "/opt/chrome", "open_profile": "Personal"}"#,
        )
        .expect("write");

        let settings = load(path).expect("load should work");
        assert_eq!(settings.browser_binary(), "/opt/chrome");
        assert_eq!(settings.open_profile(), "Personal");
        assert!(settings.chrome_dir.is_none());
    }
}
