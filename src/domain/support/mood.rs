//! Mood estimates for the mood card.

use serde::{Deserialize, Serialize};

use crate::domain::cycle::CyclePhase;

/// Rough mood expected in each phase. One mood per phase; undefined before
/// any cycle data is recorded, which callers express by having no phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodEstimate {
    Happy,
    Playful,
    Cranky,
    Painful,
}

impl MoodEstimate {
    /// The mood estimate for a phase.
    pub fn for_phase(phase: CyclePhase) -> Self {
        match phase {
            CyclePhase::Follicular => Self::Happy,
            CyclePhase::Ovulatory => Self::Playful,
            CyclePhase::Luteal => Self::Cranky,
            CyclePhase::Menstruating => Self::Painful,
        }
    }

    /// Display label for the card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Playful => "Playful",
            Self::Cranky => "Cranky",
            Self::Painful => "Painful",
        }
    }

    /// Emoji shown on the card.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😁",
            Self::Playful => "😜",
            Self::Cranky => "😒",
            Self::Painful => "😩",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_phase_maps_to_its_mood() {
        assert_eq!(MoodEstimate::for_phase(CyclePhase::Follicular), MoodEstimate::Happy);
        assert_eq!(MoodEstimate::for_phase(CyclePhase::Ovulatory), MoodEstimate::Playful);
        assert_eq!(MoodEstimate::for_phase(CyclePhase::Luteal), MoodEstimate::Cranky);
        assert_eq!(MoodEstimate::for_phase(CyclePhase::Menstruating), MoodEstimate::Painful);
    }

    #[test]
    fn labels_and_emoji_are_present_for_every_mood() {
        for phase in CyclePhase::all() {
            let mood = MoodEstimate::for_phase(phase);
            assert!(!mood.label().is_empty());
            assert!(!mood.emoji().is_empty());
        }
    }
}
