use rand::{Rng, seq::IndexedRandom as _};
use serde::{Deserialize, Serialize};

use crate::{
    InvalidMove, InvalidMoveReason, NoLegalMove,
    core::{Board, CELL_COUNT, Cell, Line, Outcome, Side},
};

/// State of a single game: the board, the side to move and the outcome.
///
/// `GameState` is the only way to mutate a board during play. Every accepted
/// move re-evaluates the whole board, so [`outcome`](Self::outcome) always
/// matches the cells. Once an outcome is set every further move is rejected
/// until [`reset`](Self::reset).
///
/// # Example
///
/// ```
/// use tictactoe_engine::{GameState, Outcome, Side};
///
/// let mut state = GameState::new();
/// for (index, mover) in [
///     (0, Side::Player),
///     (4, Side::Ai),
///     (1, Side::Player),
///     (8, Side::Ai),
///     (2, Side::Player),
/// ] {
///     state.apply_move(index, mover).unwrap();
/// }
///
/// assert_eq!(state.outcome(), Some(Outcome::PlayerWins));
/// assert!(state.apply_move(3, Side::Ai).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Side,
    outcome: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a fresh game: empty board, Player to move, no outcome.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::EMPTY,
            current_turn: Side::Player,
            outcome: None,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    /// Returns the side to move.
    ///
    /// Not meaningful once [`outcome`](Self::outcome) is set.
    #[must_use]
    pub const fn current_turn(&self) -> Side {
        self.current_turn
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.board.filled_count()
    }

    /// Returns the completed line if the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        self.board.winning_line().map(|(line, _)| line)
    }

    /// Returns an immutable copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_turn: self.current_turn,
            outcome: self.outcome,
            winning_line: self.winning_line().map(Line::indices),
        }
    }

    /// Places `mover`'s mark on the cell at `index`.
    ///
    /// On success the turn passes to the other side and the outcome is
    /// recomputed from the full board. On failure the state is left untouched.
    pub fn apply_move(&mut self, index: usize, mover: Side) -> Result<(), InvalidMove> {
        if let Err(reason) = self.check_move(index, mover) {
            tracing::trace!(index, %mover, %reason, "move rejected");
            return Err(InvalidMove::new(index, mover, reason));
        }

        self.board.set(index, mover.mark());
        self.current_turn = mover.opponent();
        self.outcome = self.board.evaluate();

        tracing::debug!(index, %mover, moves = self.move_count(), "move applied");
        if let Some(outcome) = self.outcome {
            tracing::debug!(%outcome, "game over");
        }
        Ok(())
    }

    fn check_move(&self, index: usize, mover: Side) -> Result<(), InvalidMoveReason> {
        if self.outcome.is_some() {
            return Err(InvalidMoveReason::GameOver);
        }
        match self.board.get(index) {
            None => return Err(InvalidMoveReason::OutOfRange),
            Some(cell) if !cell.is_empty() => return Err(InvalidMoveReason::Occupied),
            Some(_) => {}
        }
        if mover != self.current_turn {
            return Err(InvalidMoveReason::NotYourTurn);
        }
        Ok(())
    }

    /// Picks an empty cell uniformly at random.
    ///
    /// The state is not modified; pass the returned index to
    /// [`apply_move`](Self::apply_move) to play it. Whose turn it is does not
    /// affect the choice.
    pub fn choose_ai_move<R>(&self, rng: &mut R) -> Result<usize, NoLegalMove>
    where
        R: Rng + ?Sized,
    {
        self.board
            .empty_indices()
            .choose(rng)
            .copied()
            .ok_or(NoLegalMove)
    }

    /// Restores the initial state.
    pub fn reset(&mut self) {
        tracing::trace!(moves = self.move_count(), "game reset");
        *self = Self::new();
    }
}

/// Immutable copy of a [`GameState`] for hosts to render or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_turn: Side,
    pub outcome: Option<Outcome>,
    pub winning_line: Option<[usize; 3]>,
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn play(state: &mut GameState, moves: &[(usize, Side)]) {
        for &(index, mover) in moves {
            state
                .apply_move(index, mover)
                .unwrap_or_else(|e| panic!("move {index} by {mover} failed: {e}"));
        }
    }

    /// Plays a sequence that leaves only the cells in `open` empty, with no winner.
    fn state_with_open_cells(open: &[usize]) -> GameState {
        // X O X / X O O / O X X is a drawn position; skip the moves on `open`.
        const DRAW: [(usize, Side); 9] = [
            (0, Side::Player),
            (1, Side::Ai),
            (2, Side::Player),
            (4, Side::Ai),
            (3, Side::Player),
            (5, Side::Ai),
            (7, Side::Player),
            (6, Side::Ai),
            (8, Side::Player),
        ];
        let mut state = GameState::new();
        let moves: Vec<_> = DRAW
            .iter()
            .copied()
            .filter(|(index, _)| !open.contains(index))
            .collect();
        let mut turn = Side::Player;
        let mut player = moves.iter().filter(|(_, s)| *s == Side::Player);
        let mut ai = moves.iter().filter(|(_, s)| *s == Side::Ai);
        loop {
            let next = match turn {
                Side::Player => player.next(),
                Side::Ai => ai.next(),
            };
            let Some(&(index, mover)) = next else {
                break;
            };
            state.apply_move(index, mover).unwrap();
            turn = turn.opponent();
        }
        assert_eq!(state.outcome(), None);
        assert_eq!(state.board().empty_indices().as_slice(), open);
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.cells(), &[Cell::Empty; CELL_COUNT]);
        assert_eq!(state.current_turn(), Side::Player);
        assert_eq!(state.outcome(), None);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_apply_move_marks_cell_and_flips_turn() {
        let mut state = GameState::new();
        state.apply_move(4, Side::Player).unwrap();
        assert_eq!(state.cells()[4], Cell::PlayerMark);
        assert_eq!(state.current_turn(), Side::Ai);

        state.apply_move(0, Side::Ai).unwrap();
        assert_eq!(state.cells()[0], Cell::AiMark);
        assert_eq!(state.current_turn(), Side::Player);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = GameState::new();
        state.apply_move(4, Side::Player).unwrap();
        let before = state.clone();

        let err = state.apply_move(4, Side::Ai).unwrap_err();
        assert_eq!(err.reason(), InvalidMoveReason::Occupied);
        assert_eq!(err.index(), 4);
        assert_eq!(err.mover(), Side::Ai);
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut state = GameState::new();
        let err = state.apply_move(9, Side::Player).unwrap_err();
        assert!(err.reason().is_out_of_range());
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_wrong_mover_is_rejected() {
        let mut state = GameState::new();
        let err = state.apply_move(0, Side::Ai).unwrap_err();
        assert!(err.reason().is_not_your_turn());
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_player_wins_top_row() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (0, Side::Player),
                (4, Side::Ai),
                (1, Side::Player),
                (8, Side::Ai),
                (2, Side::Player),
            ],
        );
        assert_eq!(state.outcome(), Some(Outcome::PlayerWins));
        assert_eq!(state.winning_line().map(Line::indices), Some([0, 1, 2]));

        // The game is over: the turn no longer advances.
        let turn = state.current_turn();
        let err = state.apply_move(3, turn).unwrap_err();
        assert!(err.reason().is_game_over());
        assert_eq!(state.current_turn(), turn);
        assert_eq!(state.move_count(), 5);
    }

    #[test]
    fn test_ai_wins_diagonal() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (1, Side::Player),
                (2, Side::Ai),
                (3, Side::Player),
                (4, Side::Ai),
                (8, Side::Player),
                (6, Side::Ai),
            ],
        );
        assert_eq!(state.outcome(), Some(Outcome::AiWins));
        assert_eq!(state.winning_line().map(Line::indices), Some([2, 4, 6]));
    }

    #[test]
    fn test_left_column_ends_game_before_board_fills() {
        // Player owns 0, 3 and 6 after the fifth move, so the remaining
        // moves of this sequence are rejected.
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (0, Side::Player),
                (1, Side::Ai),
                (3, Side::Player),
                (4, Side::Ai),
                (6, Side::Player),
            ],
        );
        assert_eq!(state.outcome(), Some(Outcome::PlayerWins));
        for (index, mover) in [(2, Side::Ai), (7, Side::Player), (5, Side::Ai), (8, Side::Player)] {
            let err = state.apply_move(index, mover).unwrap_err();
            assert!(err.reason().is_game_over());
        }
        assert_eq!(state.move_count(), 5);
    }

    #[test]
    fn test_nine_moves_without_line_is_draw() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (0, Side::Player),
                (1, Side::Ai),
                (2, Side::Player),
                (4, Side::Ai),
                (3, Side::Player),
                (5, Side::Ai),
                (7, Side::Player),
                (6, Side::Ai),
            ],
        );
        assert_eq!(state.outcome(), None);
        play(&mut state, &[(8, Side::Player)]);
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.move_count(), CELL_COUNT);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (0, Side::Player),
                (4, Side::Ai),
                (1, Side::Player),
                (8, Side::Ai),
                (2, Side::Player),
            ],
        );
        state.reset();
        assert_eq!(state, GameState::new());

        let mut state = state_with_open_cells(&[8]);
        state.reset();
        assert_eq!(state.cells(), &[Cell::Empty; CELL_COUNT]);
        assert_eq!(state.current_turn(), Side::Player);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_at_most_one_side_owns_lines_after_any_move() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new();
        for _ in 0..500 {
            while !state.is_over() {
                let index = state.choose_ai_move(&mut rng).unwrap();
                state.apply_move(index, state.current_turn()).unwrap();

                let owners: Vec<_> = crate::LINES
                    .into_iter()
                    .filter_map(|line| state.board().line_owner(line))
                    .collect();
                assert!(owners.windows(2).all(|w| w[0] == w[1]), "{}", state.board());
                assert_eq!(state.outcome(), state.board().evaluate());
            }
            state.reset();
        }
    }

    #[test]
    fn test_choose_ai_move_single_open_cell() {
        let state = state_with_open_cells(&[8]);
        let mut rng = Pcg32::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(state.choose_ai_move(&mut rng), Ok(8));
        }
    }

    #[test]
    fn test_choose_ai_move_on_full_board() {
        let mut state = GameState::new();
        play(
            &mut state,
            &[
                (0, Side::Player),
                (1, Side::Ai),
                (2, Side::Player),
                (4, Side::Ai),
                (3, Side::Player),
                (5, Side::Ai),
                (7, Side::Player),
                (6, Side::Ai),
                (8, Side::Player),
            ],
        );
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(state.choose_ai_move(&mut rng), Err(NoLegalMove));
    }

    #[test]
    fn test_choose_ai_move_is_uniform() {
        let state = state_with_open_cells(&[6, 7, 8]);
        let before = state.clone();
        let mut rng = Pcg32::seed_from_u64(0x5eed);
        let mut counts = [0_usize; CELL_COUNT];
        for _ in 0..10_000 {
            counts[state.choose_ai_move(&mut rng).unwrap()] += 1;
        }
        for index in [6, 7, 8] {
            assert!(
                (3000..=3667).contains(&counts[index]),
                "cell {index} chosen {} times: {counts:?}",
                counts[index]
            );
        }
        assert_eq!(counts.iter().sum::<usize>(), 10_000);
        assert_eq!(state, before);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut state = GameState::new();
        play(&mut state, &[(4, Side::Player)]);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.current_turn, Side::Ai);
        assert_eq!(snapshot.outcome, None);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
