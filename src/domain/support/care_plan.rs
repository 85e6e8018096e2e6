//! Care plan preferences and the checklist generated from them.
//!
//! Preferences are the one structured blob in the store: JSON-encoded
//! through the string slot. A missing or unreadable blob simply means no
//! plan has been set up yet.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::ports::{PreferenceStore, StoreKey};

/// How comfort is best offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortType {
    Hug,
    Space,
    Distraction,
    Talk,
}

impl ComfortType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hug => "A warm hug",
            Self::Space => "Some quiet space",
            Self::Distraction => "A gentle distraction",
            Self::Talk => "Someone to talk to",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Hug => "heart.circle.fill",
            Self::Space => "figure.walk",
            Self::Distraction => "gamecontroller.fill",
            Self::Talk => "bubble.left.and.bubble.right.fill",
        }
    }
}

/// The persisted care preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarePlanPreferences {
    pub comfort_preference: ComfortType,
    pub top_helps: Vec<String>,
    pub top_avoids: Vec<String>,
    pub red_flags: Vec<String>,
}

impl Default for CarePlanPreferences {
    fn default() -> Self {
        Self {
            comfort_preference: ComfortType::Hug,
            top_helps: Vec::new(),
            top_avoids: Vec::new(),
            red_flags: Vec::new(),
        }
    }
}

/// One generated checklist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub text: String,
    pub checked: bool,
}

/// The care plan: preferences plus the checklist derived from them.
pub struct CarePlan {
    store: Arc<dyn PreferenceStore>,
    preferences: Option<CarePlanPreferences>,
    checklist: Vec<ChecklistEntry>,
}

impl CarePlan {
    /// Restores preferences from the store and regenerates the checklist.
    ///
    /// A missing blob, a load error or a decode failure all restore as
    /// "no preferences set".
    pub fn restore(store: Arc<dyn PreferenceStore>, today: Timestamp) -> Self {
        let preferences = match store.load_string(StoreKey::CarePlanPreferences) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(preferences) => Some(preferences),
                Err(err) => {
                    tracing::warn!(%err, "stored care plan is unreadable, starting empty");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(%err, "failed to load care plan");
                None
            }
        };

        let mut plan = Self { store, preferences, checklist: Vec::new() };
        plan.generate_checklist();
        plan.reset_if_needed(today);
        plan
    }

    pub fn preferences(&self) -> Option<&CarePlanPreferences> {
        self.preferences.as_ref()
    }

    pub fn checklist(&self) -> &[ChecklistEntry] {
        &self.checklist
    }

    /// Replaces the preferences, persists them and rebuilds the checklist.
    pub fn save_preferences(&mut self, preferences: CarePlanPreferences) {
        match serde_json::to_string(&preferences) {
            Ok(json) => {
                if let Err(err) = self.store.save_string(StoreKey::CarePlanPreferences, &json) {
                    tracing::warn!(%err, "failed to persist care plan");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to encode care plan"),
        }
        self.preferences = Some(preferences);
        self.generate_checklist();
    }

    /// Toggles the entry at `index`; out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(entry) = self.checklist.get_mut(index) {
            entry.checked = !entry.checked;
        }
    }

    /// Unchecks the checklist when the shared monthly reset is due.
    pub fn reset_if_needed(&mut self, today: Timestamp) {
        let last_reset = self.store.load_date(StoreKey::LastResetDate).unwrap_or(None);
        match last_reset {
            Some(last) if last.same_month_as(&today) => {}
            _ => {
                for entry in &mut self.checklist {
                    entry.checked = false;
                }
                if let Err(err) = self.store.save_date(StoreKey::LastResetDate, today) {
                    tracing::warn!(%err, "failed to persist reset date");
                }
            }
        }
    }

    /// Rebuilds the checklist: the comfort reminder, up to three non-empty
    /// helps, and up to three red flags marked as warnings.
    fn generate_checklist(&mut self) {
        let preferences = match &self.preferences {
            Some(preferences) => preferences,
            None => {
                self.checklist.clear();
                return;
            }
        };

        let mut entries = Vec::new();
        entries.push(ChecklistEntry {
            text: format!("Remember: {}", preferences.comfort_preference.label()),
            checked: false,
        });

        for help in preferences.top_helps.iter().take(3).filter(|h| !h.is_empty()) {
            entries.push(ChecklistEntry { text: help.clone(), checked: false });
        }

        for flag in preferences.red_flags.iter().take(3).filter(|f| !f.is_empty()) {
            entries.push(ChecklistEntry {
                text: format!("⚠️ Watch for: {flag}"),
                checked: false,
            });
        }

        self.checklist = entries;
    }
}
