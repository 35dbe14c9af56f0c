use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config;
use crate::error::{AppError, AppResult};

/// One entry of the browser's profile cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    /// Directory name of the profile inside the user data dir.
    pub key: String,
    pub display_name: String,
    /// Signed-in account, usually an email address.
    pub identifier: String,
}

impl ProfileRecord {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            identifier: identifier.into(),
        }
    }

    pub fn matches(&self, requested: &str) -> bool {
        self.display_name == requested || self.identifier == requested
    }
}

/// Profiles in the order the browser stored them, plus the last used key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRegistry {
    records: Vec<ProfileRecord>,
    last_used_key: Option<String>,
}

impl ProfileRegistry {
    pub fn new(records: Vec<ProfileRecord>, last_used_key: Option<String>) -> Self {
        let last_used_key = last_used_key.filter(|key| !key.is_empty());
        Self {
            records,
            last_used_key,
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let raw: Value = config::read_json_file(path)?;
        let state: LocalState = serde_json::from_value(raw)
            .map_err(|err| AppError::MalformedInput(format!("{}: {err}", path.display())))?;
        state.try_into()
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn last_used_key(&self) -> Option<&str> {
        self.last_used_key.as_deref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.iter().any(|record| record.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct LocalState {
    profile: ProfileSection,
}

#[derive(Debug, Deserialize)]
struct ProfileSection {
    #[serde(default)]
    info_cache: Map<String, Value>,
    #[serde(default)]
    last_used: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfoCacheEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    user_name: String,
}

impl TryFrom<LocalState> for ProfileRegistry {
    type Error = AppError;

    fn try_from(state: LocalState) -> AppResult<Self> {
        let ProfileSection {
            info_cache,
            last_used,
        } = state.profile;

        // Map iteration follows document order (serde_json `preserve_order`).
        let records = info_cache
            .into_iter()
            .map(|(key, value)| {
                let entry: InfoCacheEntry = serde_json::from_value(value).map_err(|err| {
                    AppError::MalformedInput(format!("profile entry {key:?}: {err}"))
                })?;
                Ok(ProfileRecord::new(key, entry.name, entry.user_name))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self::new(records, last_used))
    }
}
