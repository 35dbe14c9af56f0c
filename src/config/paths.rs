use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::Settings;

const APP_DIR: &str = "bookmarks";
const LOCAL_STATE_FILE: &str = "Local State";
const BOOKMARKS_FILE: &str = "Bookmarks";

/// Where this tool keeps its own settings.
#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Ok(Self {
            config_dir: config_root.join(APP_DIR),
        })
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

/// Layout of a Chrome user data directory.
#[derive(Debug, Clone)]
pub struct BrowserPaths {
    user_data_dir: PathBuf,
}

impl BrowserPaths {
    pub fn new(user_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_data_dir: user_data_dir.into(),
        }
    }

    /// The flag wins over settings, settings win over the platform default.
    pub fn discover(explicit: Option<PathBuf>, settings: &Settings) -> AppResult<Self> {
        let dir = explicit
            .or_else(|| settings.chrome_dir.clone())
            .or_else(default_user_data_dir)
            .ok_or_else(|| {
                AppError::Config(
                    "unable to resolve chrome user data directory. pass --chrome-dir".to_string(),
                )
            })?;

        Ok(Self::new(dir))
    }

    pub fn local_state_file(&self) -> PathBuf {
        self.user_data_dir.join(LOCAL_STATE_FILE)
    }

    pub fn bookmarks_file(&self, profile_key: &str) -> PathBuf {
        self.user_data_dir.join(profile_key).join(BOOKMARKS_FILE)
    }

    pub fn user_data_dir(&self) -> &Path {
        &self.user_data_dir
    }
}

#[cfg(target_os = "macos")]
fn default_user_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("Google").join("Chrome"))
}

#[cfg(target_os = "windows")]
fn default_user_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("Google").join("Chrome").join("User Data"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_user_data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("google-chrome"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_bookmarks_live_under_profile_key() {
        let paths = BrowserPaths::new("/chrome");
        assert_eq!(
            paths.bookmarks_file("Profile 1"),
            PathBuf::from("/chrome/Profile 1/Bookmarks")
        );
        assert_eq!(paths.local_state_file(), PathBuf::from("/chrome/Local State"));
    }

    #[test]
    fn explicit_dir_overrides_settings() {
        let settings = Settings {
            chrome_dir: Some(PathBuf::from("/from/settings")),
            ..Settings::default()
        };

        let paths = BrowserPaths::discover(Some(PathBuf::from("/from/flag")), &settings)
            .expect("discover should work");
        assert_eq!(paths.user_data_dir(), Path::new("/from/flag"));

        let paths = BrowserPaths::discover(None, &settings).expect("discover should work");
        assert_eq!(paths.user_data_dir(), Path::new("/from/settings"));
    }
}
