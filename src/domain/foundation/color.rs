//! Display colors shared by phases and the pain scale.

use serde::{Deserialize, Serialize};

/// Named display color. The UI layer decides how to render each one; the
/// domain only picks which color applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Purple,
    Blue,
    Yellow,
    Green,
    Orange,
    Black,
}

impl Color {
    /// Hex representation, for consumers that render raw color values.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#e0392b",
            Self::Purple => "#9d45c9",
            Self::Blue => "#2d7ff0",
            Self::Yellow => "#f2c230",
            Self::Green => "#3aa655",
            Self::Orange => "#f28c28",
            Self::Black => "#000000",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_values_are_well_formed() {
        for color in [
            Color::Red,
            Color::Purple,
            Color::Blue,
            Color::Yellow,
            Color::Green,
            Color::Orange,
            Color::Black,
        ] {
            let hex = color.hex();
            assert!(hex.starts_with('#'));
            assert_eq!(hex.len(), 7);
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), "\"red\"");
    }
}
