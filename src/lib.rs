//! Cycle Companion - Menstrual cycle tracking and partner support engine.
//!
//! This crate implements the cycle-phase engine behind a partner support
//! companion: recorded period dates, per-date phase derivation, predicted
//! future period windows, and the supportive models (mood/pain estimates,
//! readiness checklist, care plan, 7-day quest) that consume them.

pub mod adapters;
pub mod domain;
pub mod ports;
