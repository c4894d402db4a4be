use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
///
/// The human always plays as [`Side::Player`] and moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Side {
    #[display("Player")]
    Player,
    #[display("AI")]
    Ai,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Player, Self::Ai];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }

    /// Returns the mark this side leaves on the board.
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Self::Player => Cell::PlayerMark,
            Self::Ai => Cell::AiMark,
        }
    }
}

/// Content of a single board cell.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum Cell {
    #[default]
    Empty,
    PlayerMark,
    AiMark,
}

impl Cell {
    /// Returns the side owning this cell, or `None` if it is empty.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Self::Empty => None,
            Self::PlayerMark => Some(Side::Player),
            Self::AiMark => Some(Side::Ai),
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::PlayerMark => 'X',
            Self::AiMark => 'O',
        }
    }
}
