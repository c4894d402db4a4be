use serde::{Deserialize, Serialize};

use super::cell::Side;

/// Terminal result of a finished game.
///
/// A game still in progress has no outcome; it is represented as
/// `Option<Outcome>::None` throughout the crate.
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
pub enum Outcome {
    #[display("Player has Won")]
    PlayerWins,
    #[display("AI has Won")]
    AiWins,
    #[display("Draw")]
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerWins,
            Side::Ai => Self::AiWins,
        }
    }

    /// Returns the winning side, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::PlayerWins => Some(Side::Player),
            Self::AiWins => Some(Side::Ai),
            Self::Draw => None,
        }
    }
}
