//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects that form the vocabulary of the
//! Cycle Companion domain.

mod color;
mod timestamp;

pub use color::Color;
pub use timestamp::Timestamp;
