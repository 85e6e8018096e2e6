//! Cycle module - The cycle-phase engine and its supporting types.
//!
//! Owns the recorded period dates, derives the phase for any date,
//! maintains the rolling window of predicted future period ranges, and
//! answers temporal proximity queries. The month grid helper provides the
//! calendar-range bookkeeping the calendar display relies on.

mod engine;
mod month_grid;
mod period_range;
mod phase;

pub use engine::CycleEngine;
pub use month_grid::{month_grid, GridDay};
pub use period_range::PeriodRange;
pub use phase::CyclePhase;

/// Length of the modeled cycle, in days.
pub const CYCLE_LENGTH_DAYS: i64 = 28;

/// Length of the follicular segment within a cycle.
pub const FOLLICULAR_DAYS: i64 = 13;

/// Length of the ovulatory segment within a cycle.
pub const OVULATORY_DAYS: i64 = 1;

/// Length of the luteal segment within a cycle.
///
/// The three segment lengths sum to [`CYCLE_LENGTH_DAYS`]; changing one
/// requires re-deriving the others.
pub const LUTEAL_DAYS: i64 = 14;

/// Period length assumed when no end date has been recorded.
pub const DEFAULT_PERIOD_DAYS: i64 = 5;

/// How many future cycles to project period ranges for.
pub const PROJECTED_CYCLES: i64 = 12;
