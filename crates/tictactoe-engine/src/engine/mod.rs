//! Game flow on top of the [`core`](crate::core) board model.
//!
//! - [`GameState`] - board, side to move and outcome; the only mutation path
//! - [`GameSnapshot`] - immutable copy of a state for hosts
//! - [`RandomAi`] - the computer opponent, picking a random empty cell
//! - [`AiSeed`] - seed for reproducible AI choices
//!
//! # Game Flow
//!
//! 1. Create a [`GameState`]; the Player moves first
//! 2. The host maps user input to a cell index and calls
//!    [`GameState::apply_move`] for the Player
//! 3. The host asks [`RandomAi::choose_move`] for a cell and applies it for the AI
//! 4. Repeat until [`GameState::outcome`] is set
//! 5. [`GameState::reset`] starts a new game
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, RandomAi, Side};
//!
//! let mut state = GameState::new();
//! let mut ai = RandomAi::new();
//!
//! state.apply_move(4, Side::Player).unwrap();
//! let index = ai.choose_move(&state).unwrap();
//! state.apply_move(index, Side::Ai).unwrap();
//!
//! assert_eq!(state.move_count(), 2);
//! assert_eq!(state.current_turn(), Side::Player);
//! ```

pub use self::{game_state::*, random_ai::*};

mod game_state;
mod random_ai;
