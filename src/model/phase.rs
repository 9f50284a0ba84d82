use serde::{Deserialize, Serialize};

/// Sales phase (etap) of the development.
///
/// Each phase ships its own unit inventory export and scopes its own block
/// letters, so the same (block, unit) pair can recur across phases. Lookups
/// that cross datasets must stay phase-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl Phase {
    /// All phases in sales order.
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Phase identifier as it appears in the source data (ETAP column).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "Etap 1",
            Self::Two => "Etap 2",
            Self::Three => "Etap 3",
            Self::Four => "Etap 4",
            Self::Five => "Etap 5",
        }
    }
}
