//! Preference Store Port - Interface for persisting companion state.
//!
//! This port defines how the small set of scalar and set-valued fields
//! behind the companion (cycle dates, quest progress, care plan
//! preferences) is saved and loaded. Values are raw scalars keyed by a
//! fixed set of keys; there is no schema versioning.
//!
//! All operations are synchronous: the engine performs fire-and-forget
//! writes on each mutation and a one-shot load at construction.

use crate::domain::foundation::Timestamp;

/// The fixed set of persistence keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKey {
    /// Start of the most recently recorded period.
    CycleStartDate,
    /// End of the most recently recorded period.
    PeriodEndDate,
    /// Last time the monthly checklists were reset.
    LastResetDate,
    /// When the 7-day quest was first started.
    QuestStartDate,
    /// JSON-encoded set of completed quest day ids.
    QuestCompletedDays,
    /// JSON-encoded care plan preferences.
    CarePlanPreferences,
}

impl StoreKey {
    /// The raw key string used by the backing store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CycleStartDate => "cycleStartDate",
            Self::PeriodEndDate => "periodEndDate",
            Self::LastResetDate => "lastResetDate",
            Self::QuestStartDate => "questStartDate",
            Self::QuestCompletedDays => "questCompletedDaysData",
            Self::CarePlanPreferences => "carePlanPreferences",
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize value for key '{key}': {reason}")]
    SerializationFailed { key: &'static str, reason: String },

    #[error("Failed to deserialize value for key '{key}': {reason}")]
    DeserializationFailed { key: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for persisting and loading companion preferences.
///
/// Date-valued keys hold timestamps; string-valued keys hold opaque blobs
/// the domain encodes itself (JSON for sets and structured preferences).
/// Loading a key that was never written yields `Ok(None)`.
pub trait PreferenceStore: Send + Sync {
    /// Load a date value, or `None` if the key was never written.
    fn load_date(&self, key: StoreKey) -> Result<Option<Timestamp>, StoreError>;

    /// Save a date value, overwriting any previous one.
    fn save_date(&self, key: StoreKey, value: Timestamp) -> Result<(), StoreError>;

    /// Load a string value, or `None` if the key was never written.
    fn load_string(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    /// Save a string value, overwriting any previous one.
    fn save_string(&self, key: StoreKey, value: &str) -> Result<(), StoreError>;

    /// Remove any value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: StoreKey) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_strings_match_the_stored_schema() {
        assert_eq!(StoreKey::CycleStartDate.as_str(), "cycleStartDate");
        assert_eq!(StoreKey::PeriodEndDate.as_str(), "periodEndDate");
        assert_eq!(StoreKey::LastResetDate.as_str(), "lastResetDate");
    }

    #[test]
    fn key_strings_are_unique() {
        let keys = [
            StoreKey::CycleStartDate,
            StoreKey::PeriodEndDate,
            StoreKey::LastResetDate,
            StoreKey::QuestStartDate,
            StoreKey::QuestCompletedDays,
            StoreKey::CarePlanPreferences,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn store_error_messages_name_the_key() {
        let err = StoreError::DeserializationFailed {
            key: StoreKey::CarePlanPreferences.as_str(),
            reason: "unexpected end of input".to_string(),
        };
        assert!(err.to_string().contains("carePlanPreferences"));
    }
}
