//! Pain level estimates for the pain card.
//!
//! The estimate depends only on the signed number of days between the
//! recorded cycle start and today: pain peaks on the first two period
//! days, is mild in the few days leading up, and eases off afterwards.

use crate::domain::foundation::Color;

/// Severity bucket for the pain label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PainSeverity {
    Normal,
    Mild,
    Severe,
}

/// A pain estimate on a `[0, 1]` scale with its severity bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PainEstimate {
    level: f64,
    severity: PainSeverity,
}

impl PainEstimate {
    /// Estimate for a signed day offset from the recorded cycle start.
    ///
    /// Days 0..=1 are severe (0.9), days -3..=-1 mild (0.7), days 2..=5
    /// the normal tail of the period (0.4), anything else baseline (0.1).
    pub fn for_day_offset(days_since_start: i64) -> Self {
        if (0..=1).contains(&days_since_start) {
            Self { level: 0.9, severity: PainSeverity::Severe }
        } else if (-3..=-1).contains(&days_since_start) {
            Self { level: 0.7, severity: PainSeverity::Mild }
        } else if (2..=5).contains(&days_since_start) {
            Self { level: 0.4, severity: PainSeverity::Normal }
        } else {
            Self { level: 0.1, severity: PainSeverity::Normal }
        }
    }

    /// The estimated level on a `[0, 1]` scale.
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn severity(&self) -> PainSeverity {
        self.severity
    }

    /// Display label for the card.
    pub fn label(&self) -> &'static str {
        match self.severity {
            PainSeverity::Severe => "Severe Pain",
            PainSeverity::Mild => "Mild Pain",
            PainSeverity::Normal => "Normal Pain",
        }
    }

    /// Slider color, banded at 0.25 / 0.5 / 0.75.
    pub fn color(&self) -> Color {
        if self.level < 0.25 {
            Color::Green
        } else if self.level < 0.5 {
            Color::Yellow
        } else if self.level < 0.75 {
            Color::Orange
        } else {
            Color::Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_period_days_are_severe() {
        for day in [0, 1] {
            let estimate = PainEstimate::for_day_offset(day);
            assert_eq!(estimate.severity(), PainSeverity::Severe);
            assert_eq!(estimate.level(), 0.9);
            assert_eq!(estimate.label(), "Severe Pain");
            assert_eq!(estimate.color(), Color::Red);
        }
    }

    #[test]
    fn run_up_days_are_mild() {
        for day in [-3, -2, -1] {
            let estimate = PainEstimate::for_day_offset(day);
            assert_eq!(estimate.severity(), PainSeverity::Mild);
            assert_eq!(estimate.level(), 0.7);
            assert_eq!(estimate.color(), Color::Orange);
        }
    }

    #[test]
    fn period_tail_is_normal_at_point_four() {
        for day in [2, 5] {
            let estimate = PainEstimate::for_day_offset(day);
            assert_eq!(estimate.severity(), PainSeverity::Normal);
            assert_eq!(estimate.level(), 0.4);
            assert_eq!(estimate.color(), Color::Yellow);
        }
    }

    #[test]
    fn everything_else_is_baseline() {
        for day in [-10, 6, 100] {
            let estimate = PainEstimate::for_day_offset(day);
            assert_eq!(estimate.severity(), PainSeverity::Normal);
            assert_eq!(estimate.level(), 0.1);
            assert_eq!(estimate.color(), Color::Green);
        }
    }
}
