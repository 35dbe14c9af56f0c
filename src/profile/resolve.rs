use crate::error::{AppError, AppResult};

use super::ProfileRegistry;

/// Key used when nothing better is known.
pub const FALLBACK_PROFILE_KEY: &str = "Default";

/// Picks the storage key of one profile.
///
/// With an identifier, records are scanned in registry order and the first one
/// whose display name or identifier equals it wins; duplicates are not an
/// error. An empty identifier counts as absent. Without one, the last used key
/// is returned when it names a known profile, otherwise [`FALLBACK_PROFILE_KEY`].
pub fn resolve(registry: &ProfileRegistry, requested: Option<&str>) -> AppResult<String> {
    if let Some(requested) = requested.filter(|value| !value.is_empty()) {
        let record = registry
            .records()
            .iter()
            .find(|record| record.matches(requested))
            .ok_or_else(|| AppError::ProfileNotFound(requested.to_string()))?;

        tracing::info!(profile = %record.key, requested, "matched profile");
        return Ok(record.key.clone());
    }

    match registry.last_used_key() {
        Some(key) if registry.is_empty() || registry.contains(key) => {
            tracing::info!(profile = key, "using last used profile");
            Ok(key.to_string())
        }
        Some(key) => {
            tracing::warn!(
                profile = key,
                "last used profile is not in the profile cache, falling back to {FALLBACK_PROFILE_KEY}"
            );
            Ok(FALLBACK_PROFILE_KEY.to_string())
        }
        None => Ok(FALLBACK_PROFILE_KEY.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileRecord;

    fn registry(last_used: Option<&str>) -> ProfileRegistry {
        ProfileRegistry::new(
            vec![
                ProfileRecord::new("Default", "Personal", "me@example.com"),
                ProfileRecord::new("Profile 1", "work", "me@corp.example"),
                ProfileRecord::new("Profile 2", "work", "other@corp.example"),
            ],
            last_used.map(str::to_string),
        )
    }

    #[test]
    fn matches_display_name() {
        assert_eq!(resolve(&registry(None), Some("Personal")).unwrap(), "Default");
    }

    #[test]
    fn matches_identifier() {
        assert_eq!(
            resolve(&registry(None), Some("other@corp.example")).unwrap(),
            "Profile 2"
        );
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        assert_eq!(resolve(&registry(None), Some("work")).unwrap(), "Profile 1");
    }

    #[test]
    fn match_is_case_sensitive() {
        let err = resolve(&registry(None), Some("Work")).unwrap_err();
        assert!(matches!(err, AppError::ProfileNotFound(id) if id == "Work"));
    }

    #[test]
    fn absent_uses_last_used() {
        assert_eq!(resolve(&registry(Some("Profile 2")), None).unwrap(), "Profile 2");
    }

    #[test]
    fn absent_without_last_used_falls_back() {
        assert_eq!(resolve(&registry(None), None).unwrap(), FALLBACK_PROFILE_KEY);
    }

    #[test]
    fn unknown_last_used_falls_back() {
        assert_eq!(
            resolve(&registry(Some("Profile 9")), None).unwrap(),
            FALLBACK_PROFILE_KEY
        );
    }

    #[test]
    fn empty_identifier_counts_as_absent() {
        assert_eq!(resolve(&registry(Some("Profile 1")), Some("")).unwrap(), "Profile 1");
    }
}
