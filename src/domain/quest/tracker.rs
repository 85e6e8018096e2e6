//! Quest completion tracking.
//!
//! The completed-day set and the quest start timestamp are the two
//! persisted fields; everything else (score, reflection, completeness)
//! is derived from the set.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::ports::{PreferenceStore, StoreKey};

use super::QUEST_LENGTH;

/// Tracks which quest days have been completed.
pub struct QuestTracker {
    store: Arc<dyn PreferenceStore>,
    completed_days: BTreeSet<u8>,
    started_at: Option<Timestamp>,
}

impl QuestTracker {
    /// Restores the tracker from the store.
    ///
    /// An unreadable completed-day blob restores as an empty set.
    pub fn restore(store: Arc<dyn PreferenceStore>) -> Self {
        let completed_days = match store.load_string(StoreKey::QuestCompletedDays) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<u8>>(&json) {
                Ok(days) => days.into_iter().collect(),
                Err(err) => {
                    tracing::warn!(%err, "stored quest progress is unreadable, starting empty");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                tracing::warn!(%err, "failed to load quest progress");
                BTreeSet::new()
            }
        };
        let started_at = store.load_date(StoreKey::QuestStartDate).unwrap_or(None);

        Self { store, completed_days, started_at }
    }

    /// When the quest was first started, if ever.
    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// Marks a day completed; the first completion stamps the quest start.
    pub fn mark_completed(&mut self, day_id: u8, now: Timestamp) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
            if let Err(err) = self.store.save_date(StoreKey::QuestStartDate, now) {
                tracing::warn!(%err, "failed to persist quest start");
            }
        }
        self.completed_days.insert(day_id);
        self.persist_completed_days();
    }

    /// Removes a day from the completed set.
    pub fn undo_completion(&mut self, day_id: u8) {
        self.completed_days.remove(&day_id);
        self.persist_completed_days();
    }

    pub fn is_day_completed(&self, day_id: u8) -> bool {
        self.completed_days.contains(&day_id)
    }

    /// Number of completed days, 0 through 7.
    pub fn support_score(&self) -> usize {
        self.completed_days.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_days.len() == QUEST_LENGTH
    }

    /// Clears all progress, including the persisted start.
    pub fn reset(&mut self) {
        self.completed_days.clear();
        self.started_at = None;
        self.persist_completed_days();
        if let Err(err) = self.store.remove(StoreKey::QuestStartDate) {
            tracing::warn!(%err, "failed to clear quest start");
        }
    }

    /// Encouraging reflection matched to the current score.
    pub fn reflection(&self) -> &'static str {
        match self.support_score() {
            0 => "Your quest hasn't started yet. Take your time — every small step matters.",
            1..=2 => "You've taken your first steps. Showing up is what counts most.",
            3..=4 => "You're building a meaningful habit of care. That takes real intention.",
            5..=6 => "Your commitment to understanding and supporting is making a difference.",
            _ => "You completed the full quest. This kind of empathy and effort is rare and deeply valued.",
        }
    }

    fn persist_completed_days(&self) {
        let days: Vec<u8> = self.completed_days.iter().copied().collect();
        match serde_json::to_string(&days) {
            Ok(json) => {
                if let Err(err) = self.store.save_string(StoreKey::QuestCompletedDays, &json) {
                    tracing::warn!(%err, "failed to persist quest progress");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to encode quest progress"),
        }
    }
}
