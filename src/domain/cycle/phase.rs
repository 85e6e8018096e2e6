//! Phases of the menstrual cycle.
//!
//! A phase is always derived from the recorded dates, never persisted.

use serde::{Deserialize, Serialize};

use super::{FOLLICULAR_DAYS, LUTEAL_DAYS, OVULATORY_DAYS};
use crate::domain::foundation::Color;

/// One of the four named segments of the ~28-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    /// The period itself.
    Menstruating,
    /// From the end of the period up to ovulation.
    Follicular,
    /// The single ovulation day.
    Ovulatory,
    /// From ovulation to the next period.
    Luteal,
}

impl CyclePhase {
    /// All phases, in cycle order.
    pub fn all() -> [Self; 4] {
        [Self::Menstruating, Self::Follicular, Self::Ovulatory, Self::Luteal]
    }

    /// Uppercase display label, e.g. "MENSTRUATING".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Menstruating => "MENSTRUATING",
            Self::Follicular => "FOLLICULAR",
            Self::Ovulatory => "OVULATORY",
            Self::Luteal => "LUTEAL",
        }
    }

    /// Display color for calendar cells and the phase banner.
    pub fn color(&self) -> Color {
        match self {
            Self::Menstruating => Color::Red,
            Self::Follicular => Color::Purple,
            Self::Ovulatory => Color::Blue,
            Self::Luteal => Color::Yellow,
        }
    }

    /// Phase for a normalized cycle day in `[0, 28)`.
    ///
    /// Days `[0, 13)` are follicular, `[13, 14)` ovulatory and `[14, 28)`
    /// luteal. Menstruation is not derivable from the cycle day alone (it
    /// depends on the recorded period range), so it never appears here.
    /// Out-of-range input yields `None`.
    pub fn from_cycle_day(normalized_day: i64) -> Option<Self> {
        if (0..FOLLICULAR_DAYS).contains(&normalized_day) {
            Some(Self::Follicular)
        } else if (FOLLICULAR_DAYS..FOLLICULAR_DAYS + OVULATORY_DAYS).contains(&normalized_day) {
            Some(Self::Ovulatory)
        } else if (FOLLICULAR_DAYS + OVULATORY_DAYS
            ..FOLLICULAR_DAYS + OVULATORY_DAYS + LUTEAL_DAYS)
            .contains(&normalized_day)
        {
            Some(Self::Luteal)
        } else {
            None
        }
    }
}
