//! Support module - Companion models that consume the cycle engine.
//!
//! # Module Organization
//!
//! - `mood` - Per-phase mood estimate for the mood card
//! - `pain` - Pain level estimate around the period start
//! - `suggestions` - Static "things to do" list for period days
//! - `readiness` - Monthly-reset readiness checklist
//! - `care_plan` - Persisted care preferences and the generated checklist

mod care_plan;
mod mood;
mod pain;
mod readiness;
mod suggestions;

pub use care_plan::{CarePlan, CarePlanPreferences, ChecklistEntry, ComfortType};
pub use mood::MoodEstimate;
pub use pain::{PainEstimate, PainSeverity};
pub use readiness::{ReadinessChecklist, ReadinessItem};
pub use suggestions::{support_suggestions, SupportSuggestion};
