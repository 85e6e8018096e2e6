//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// Most of the cycle arithmetic works at calendar-day granularity: two
/// timestamps on the same calendar day compare equal for range membership
/// and "days between" queries, independent of time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp at midnight UTC of the given calendar day.
    ///
    /// Returns `None` for an invalid year/month/day combination.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self(date.and_hms_opt(0, 0, 0)?.and_utc()))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar day this timestamp falls on.
    pub fn calendar_day(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns true if both timestamps fall on the same calendar day.
    pub fn same_day_as(&self, other: &Timestamp) -> bool {
        self.calendar_day() == other.calendar_day()
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Signed number of whole calendar days from `other` to `self`.
    ///
    /// Computed on calendar days, so two timestamps on the same day are
    /// zero days apart regardless of time-of-day. Negative when `self`
    /// falls on an earlier day than `other`.
    pub fn days_since(&self, other: &Timestamp) -> i64 {
        (self.calendar_day() - other.calendar_day()).num_days()
    }

    /// Signed number of whole hours from `other` to `self`.
    pub fn hours_since(&self, other: &Timestamp) -> i64 {
        self.0.signed_duration_since(other.0).num_hours()
    }

    /// Returns true if both timestamps fall in the same calendar month.
    pub fn same_month_as(&self, other: &Timestamp) -> bool {
        use chrono::Datelike;
        let (a, b) = (self.calendar_day(), other.calendar_day());
        a.year() == b.year() && a.month() == b.month()
    }

    /// Short display form, e.g. "Jan 5".
    pub fn short_display(&self) -> String {
        self.0.format("%b %-d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(year: i32, month: u32, day: u32) -> Timestamp {
        Timestamp::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn from_ymd_rejects_invalid_dates() {
        assert!(Timestamp::from_ymd(2025, 2, 30).is_none());
        assert!(Timestamp::from_ymd(2025, 13, 1).is_none());
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        let morning = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2025-01-03T08:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        let evening = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2025-01-03T22:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        assert!(morning.same_day_as(&evening));
        assert_eq!(evening.days_since(&morning), 0);
    }

    #[test]
    fn days_since_is_signed() {
        let start = ts(2025, 1, 10);
        assert_eq!(start.add_days(5).days_since(&start), 5);
        assert_eq!(start.add_days(-3).days_since(&start), -3);
    }

    #[test]
    fn days_since_spans_month_boundaries() {
        let jan = ts(2025, 1, 29);
        let feb = ts(2025, 2, 1);
        assert_eq!(feb.days_since(&jan), 3);
    }

    #[test]
    fn hours_since_counts_whole_hours() {
        let start = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2025-01-01T06:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        let later = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2025-01-02T05:59:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        assert_eq!(later.hours_since(&start), 23);
        assert_eq!(start.hours_since(&later), -23);
    }

    #[test]
    fn same_month_compares_year_and_month() {
        assert!(ts(2025, 3, 1).same_month_as(&ts(2025, 3, 31)));
        assert!(!ts(2025, 3, 1).same_month_as(&ts(2025, 4, 1)));
        assert!(!ts(2024, 3, 1).same_month_as(&ts(2025, 3, 1)));
    }

    #[test]
    fn serializes_transparently() {
        let t = ts(2025, 1, 15);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("2025-01-15"));
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn short_display_formats_month_and_day() {
        assert_eq!(ts(2025, 1, 5).short_display(), "Jan 5");
    }
}
