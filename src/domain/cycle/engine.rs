//! The cycle engine.
//!
//! Owns the recorded period start/end dates, derives phases, projects
//! future period windows and answers proximity queries. The engine is
//! single-threaded and synchronous: every operation is a pure function
//! over its in-memory state except the setters, which also perform a
//! fire-and-forget write to the preference store. Callers supply the
//! "today" reference explicitly; the engine never reads the clock.

use std::sync::Arc;

use super::{
    CyclePhase, PeriodRange, CYCLE_LENGTH_DAYS, DEFAULT_PERIOD_DAYS, PROJECTED_CYCLES,
};
use crate::domain::foundation::{Color, Timestamp};
use crate::ports::{PreferenceStore, StoreKey};

/// Cycle-phase and period-prediction engine.
///
/// Constructed via [`CycleEngine::restore`], which loads any previously
/// recorded dates from the store. The cached current phase starts out as
/// follicular and only ever moves to a derivable phase; a transient lack
/// of data leaves the previous value in place.
pub struct CycleEngine {
    store: Arc<dyn PreferenceStore>,
    cycle_start: Option<Timestamp>,
    period_end: Option<Timestamp>,
    future_ranges: Vec<PeriodRange>,
    current_phase: CyclePhase,
}

impl CycleEngine {
    /// Restores the engine from the store.
    ///
    /// A load error or missing value reads as "no saved date". When an end
    /// date was restored the future ranges are regenerated immediately,
    /// and the phase for `today` is cached.
    pub fn restore(store: Arc<dyn PreferenceStore>, today: Timestamp) -> Self {
        let cycle_start = Self::load_date(&*store, StoreKey::CycleStartDate);
        let period_end = Self::load_date(&*store, StoreKey::PeriodEndDate);

        let mut engine = Self {
            store,
            cycle_start,
            period_end,
            future_ranges: Vec::new(),
            current_phase: CyclePhase::Follicular,
        };

        if engine.period_end.is_some() {
            engine.regenerate_future_ranges();
        }
        engine.update_current_phase(today);

        tracing::debug!(
            has_start = engine.cycle_start.is_some(),
            has_end = engine.period_end.is_some(),
            "cycle engine restored"
        );
        engine
    }

    fn load_date(store: &dyn PreferenceStore, key: StoreKey) -> Option<Timestamp> {
        match store.load_date(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = key.as_str(), %err, "failed to load saved date");
                None
            }
        }
    }

    fn persist_date(&self, key: StoreKey, value: Timestamp) {
        if let Err(err) = self.store.save_date(key, value) {
            tracing::warn!(key = key.as_str(), %err, "failed to persist cycle date");
        }
    }

    /// The recorded period start, if any.
    pub fn cycle_start(&self) -> Option<Timestamp> {
        self.cycle_start
    }

    /// The recorded period end, if any.
    pub fn period_end(&self) -> Option<Timestamp> {
        self.period_end
    }

    /// The projected future period windows, in chronological order.
    pub fn future_ranges(&self) -> &[PeriodRange] {
        &self.future_ranges
    }

    /// Records the period start date and persists it.
    ///
    /// Future ranges are not regenerated here: projection needs the end
    /// date too, and the usual flow records the start and then an end
    /// date (or the default) right after.
    pub fn set_cycle_start(&mut self, date: Timestamp) {
        self.cycle_start = Some(date);
        self.persist_date(StoreKey::CycleStartDate, date);
    }

    /// Records the period end date, persists it and regenerates the
    /// projected future ranges.
    pub fn set_period_end(&mut self, date: Timestamp) {
        self.period_end = Some(date);
        self.persist_date(StoreKey::PeriodEndDate, date);
        self.regenerate_future_ranges();
    }

    /// Records a period start together with the default end date
    /// ([`DEFAULT_PERIOD_DAYS`] after the start), the two-step flow the
    /// date picker performs.
    pub fn record_period_start(&mut self, date: Timestamp) {
        self.set_cycle_start(date);
        self.set_period_end(date.add_days(DEFAULT_PERIOD_DAYS));
    }

    /// Days the recorded period spans, defaulting when no end is recorded.
    ///
    /// Clamped to at least one day so a degenerate record (end before
    /// start) cannot produce inverted future ranges.
    fn period_length(&self) -> i64 {
        match (self.cycle_start, self.period_end) {
            (Some(start), Some(end)) => end.days_since(&start).max(1),
            _ => DEFAULT_PERIOD_DAYS,
        }
    }

    /// Rebuilds the projected period windows from scratch.
    ///
    /// One window per subsequent 28-day cycle, [`PROJECTED_CYCLES`] cycles
    /// ahead, each spanning the recorded period length. No-op without a
    /// recorded start date. Windows are never merged, so a period length
    /// above 28 days would yield overlapping entries.
    pub fn regenerate_future_ranges(&mut self) {
        self.future_ranges.clear();

        let start = match self.cycle_start {
            Some(start) => start,
            None => return,
        };

        let period_length = self.period_length();
        for i in 1..=PROJECTED_CYCLES {
            let future_start = start.add_days(CYCLE_LENGTH_DAYS * i);
            let future_end = future_start.add_days(period_length - 1);
            self.future_ranges.push(PeriodRange::new(future_start, future_end));
        }
    }

    /// True when `date` falls inside the recorded period or any projected
    /// future window, at calendar-day granularity.
    pub fn is_date_in_period(&self, date: &Timestamp) -> bool {
        if let (Some(start), Some(end)) = (self.cycle_start, self.period_end) {
            if PeriodRange::new(start, end).contains_day(date) {
                return true;
            }
        }
        self.future_ranges.iter().any(|range| range.contains_day(date))
    }

    /// True when `date` is the first day of a projected future window.
    pub fn is_future_period_start(&self, date: &Timestamp) -> bool {
        self.future_ranges.iter().any(|range| range.starts_on(date))
    }

    /// The phase `date` falls in, or `None` before any start is recorded.
    ///
    /// Dates inside a period window are menstruating; anything else is
    /// located on the 28-day cycle via a floored modulo of the signed
    /// day offset from the recorded start, so dates long before the start
    /// still land on a valid cycle day.
    pub fn phase_for(&self, date: &Timestamp) -> Option<CyclePhase> {
        if self.is_date_in_period(date) {
            return Some(CyclePhase::Menstruating);
        }

        let start = self.cycle_start?;
        let days_since_start = date.days_since(&start);
        let normalized_day =
            ((days_since_start % CYCLE_LENGTH_DAYS) + CYCLE_LENGTH_DAYS) % CYCLE_LENGTH_DAYS;
        CyclePhase::from_cycle_day(normalized_day)
    }

    /// Refreshes the cached current phase from `today`.
    ///
    /// When no phase can be derived (no start recorded) the previously
    /// cached value is deliberately left in place.
    pub fn update_current_phase(&mut self, today: Timestamp) {
        if let Some(phase) = self.phase_for(&today) {
            self.current_phase = phase;
        }
    }

    /// The cached current phase, last refreshed by
    /// [`update_current_phase`](Self::update_current_phase).
    pub fn current_phase(&self) -> CyclePhase {
        self.current_phase
    }

    /// True when today falls inside the recorded or a projected period.
    pub fn is_currently_menstruating(&self, today: &Timestamp) -> bool {
        self.is_date_in_period(today)
    }

    /// Banner label for the current phase.
    ///
    /// Reports a prompt while no dates are recorded, and menstruating
    /// whenever today sits in a period window regardless of the cache.
    pub fn current_phase_display(&self, today: &Timestamp) -> &'static str {
        if self.cycle_start.is_none() {
            return "Select period dates";
        }
        if self.is_currently_menstruating(today) {
            return CyclePhase::Menstruating.label();
        }
        self.current_phase.label()
    }

    /// Banner color matching [`current_phase_display`](Self::current_phase_display).
    pub fn current_phase_color(&self, today: &Timestamp) -> Color {
        if self.cycle_start.is_none() {
            return Color::Black;
        }
        if self.is_currently_menstruating(today) {
            return CyclePhase::Menstruating.color();
        }
        self.current_phase.color()
    }

    /// Short label for the recorded period range, e.g. "Jan 1 - Jan 5".
    pub fn period_range_label(&self) -> String {
        match (self.cycle_start, self.period_end) {
            (Some(start), Some(end)) => {
                format!("{} - {}", start.short_display(), end.short_display())
            }
            (Some(start), None) => format!("Started {}", start.short_display()),
            _ => "Set Period".to_string(),
        }
    }

    /// True when the next projected period start is between `end_days` and
    /// `start_days` days away from `today`, inclusive.
    ///
    /// Walks forward from the recorded start one 28-day cycle at a time
    /// until it lands on the first cycle boundary at or after today; the
    /// fixed positive step guarantees termination for any finite start,
    /// including one far in the future (the walk then never advances and
    /// the distance is simply large).
    pub fn is_within_days_before_period(
        &self,
        start_days: i64,
        end_days: i64,
        today: &Timestamp,
    ) -> bool {
        let start = match self.cycle_start {
            Some(start) => start,
            None => return false,
        };

        let mut next_period = start;
        while next_period <= *today {
            next_period = next_period.add_days(CYCLE_LENGTH_DAYS);
        }

        let days_until_period = next_period.days_since(today);
        days_until_period <= start_days && days_until_period >= end_days
    }

    /// True within the first 24 hours after the recorded period start.
    pub fn is_within_24h_after_period_start(&self, today: &Timestamp) -> bool {
        let start = match self.cycle_start {
            Some(start) => start,
            None => return false,
        };
        let hours_since_start = today.hours_since(&start);
        (0..=24).contains(&hours_since_start)
    }

    /// True within the first `days` days after the recorded period start
    /// or after any projected future period start.
    ///
    /// The check runs against every projected window, so it fires once
    /// per predicted period rather than only for the recorded one.
    pub fn is_within_days_after_period_start(&self, days: i64, today: &Timestamp) -> bool {
        let start = match self.cycle_start {
            Some(start) => start,
            None => return false,
        };

        for range in &self.future_ranges {
            let since_future_start = today.days_since(&range.start);
            if (0..days).contains(&since_future_start) {
                return true;
            }
        }

        let since_start = today.days_since(&start);
        (0..days).contains(&since_start)
    }
}
