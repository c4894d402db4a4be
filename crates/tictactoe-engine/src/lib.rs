pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Why a move was rejected by [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum InvalidMoveReason {
    #[display("the game is already over")]
    GameOver,
    #[display("cell index is out of range")]
    OutOfRange,
    #[display("cell is already occupied")]
    Occupied,
    #[display("it is not this side's turn")]
    NotYourTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move by {mover} at cell {index}: {reason}")]
pub struct InvalidMove {
    index: usize,
    mover: Side,
    reason: InvalidMoveReason,
}

impl InvalidMove {
    pub(crate) const fn new(index: usize, mover: Side, reason: InvalidMoveReason) -> Self {
        Self {
            index,
            mover,
            reason,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn mover(&self) -> Side {
        self.mover
    }

    #[must_use]
    pub const fn reason(&self) -> InvalidMoveReason {
        self.reason
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no empty cell left for the AI to play")]
pub struct NoLegalMove;
