//! Readiness checklist with a monthly reset.
//!
//! The item list is fixed; only the checked flags are mutable. Checks are
//! transient, but the time of the last reset is persisted so the list
//! unchecks itself once per calendar month.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::foundation::Timestamp;
use crate::ports::{PreferenceStore, StoreKey};

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub checked: bool,
}

static DEFAULT_ITEMS: Lazy<Vec<ReadinessItem>> = Lazy::new(|| {
    [
        ("Pills", "cross.case.fill"),
        ("Heating Bag", "flame.fill"),
        ("Warm Water", "drop.fill"),
        ("Sanitary Products", "heart.circle.fill"),
        ("Disposable Bags", "bag.fill"),
        ("Comfort Snacks", "heart.fill"),
        ("Warm Drinks", "cup.and.saucer.fill"),
    ]
    .into_iter()
    .map(|(name, icon)| ReadinessItem { name, icon, checked: false })
    .collect()
});

/// The readiness checklist.
pub struct ReadinessChecklist {
    store: Arc<dyn PreferenceStore>,
    items: Vec<ReadinessItem>,
}

impl ReadinessChecklist {
    /// Builds the checklist and applies the monthly reset for `today`.
    pub fn restore(store: Arc<dyn PreferenceStore>, today: Timestamp) -> Self {
        let mut checklist = Self { store, items: DEFAULT_ITEMS.clone() };
        checklist.reset_if_needed(today);
        checklist
    }

    pub fn items(&self) -> &[ReadinessItem] {
        &self.items
    }

    /// Toggles the item at `index`; out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.checked = !item.checked;
        }
    }

    /// Unchecks everything when the last reset happened in a different
    /// calendar month (or never happened).
    pub fn reset_if_needed(&mut self, today: Timestamp) {
        let last_reset = match self.store.load_date(StoreKey::LastResetDate) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "failed to load last reset date");
                None
            }
        };

        match last_reset {
            Some(last) if last.same_month_as(&today) => {}
            _ => self.reset(today),
        }
    }

    fn reset(&mut self, today: Timestamp) {
        for item in &mut self.items {
            item.checked = false;
        }
        if let Err(err) = self.store.save_date(StoreKey::LastResetDate, today) {
            tracing::warn!(%err, "failed to persist reset date");
        }
    }
}
