//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, colors)
//! - `cycle` - The cycle engine: phases, period ranges, month grid
//! - `support` - Supportive companion models (mood, pain, readiness, care plan)
//! - `quest` - The 7-day support quest content and tracker

pub mod cycle;
pub mod foundation;
pub mod quest;
pub mod support;
