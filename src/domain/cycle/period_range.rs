//! Inclusive period date ranges.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// A concrete period window: inclusive on both ends, compared at
/// calendar-day granularity.
///
/// A range whose start falls after its end is degenerate; containment
/// checks on it answer `false` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl PeriodRange {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// True when the range is ordered (`start <= end` by calendar day).
    pub fn is_ordered(&self) -> bool {
        self.start.calendar_day() <= self.end.calendar_day()
    }

    /// True when `date` falls within the range, inclusive of both ends.
    ///
    /// Degenerate ranges contain nothing.
    pub fn contains_day(&self, date: &Timestamp) -> bool {
        if !self.is_ordered() {
            return false;
        }
        let day = date.calendar_day();
        self.start.calendar_day() <= day && day <= self.end.calendar_day()
    }

    /// True when `date` falls on the range's first day.
    pub fn starts_on(&self, date: &Timestamp) -> bool {
        self.start.same_day_as(date)
    }
}
