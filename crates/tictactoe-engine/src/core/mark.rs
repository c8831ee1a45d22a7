use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Mark {
    /// Opens the first round of every match.
    #[display("X")]
    First,
    #[display("O")]
    Second,
}

impl Mark {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Returns the other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Returns the slot of this mark in two-slot per-player tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}
