//! Quest module - The 7-day support quest.
//!
//! # Module Organization
//!
//! - `content` - The seven curated quest days (static educational text)
//! - `tracker` - Completion tracking, support score and reflections

mod content;
mod tracker;

pub use content::{quest_days, QuestDay, QUEST_LENGTH};
pub use tracker::QuestTracker;
