use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::Text,
};
use tictactoe_engine::{BOARD_SIDE, CELL_COUNT, GameState, RandomAi, Side};

use crate::view::widgets::{BoardDisplay, HelpDisplay, StatusDisplay, TurnDisplay, style};

const CENTER_CELL: usize = CELL_COUNT / 2;

/// A game of Player against the random AI.
///
/// Translates key presses and mouse clicks into Player moves and schedules
/// the AI's reply `ai_delay` after the Player has moved.
#[derive(Debug)]
pub struct PlayScreen {
    state: GameState,
    ai: RandomAi,
    ai_delay: Duration,
    ai_due: Option<Instant>,
    cursor: usize,
    spinner_frame: usize,
    area: Rect,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(ai: RandomAi, ai_delay: Duration) -> Self {
        Self {
            state: GameState::new(),
            ai,
            ai_delay,
            ai_due: None,
            cursor: CENTER_CELL,
            spinner_frame: 0,
            area: Rect::default(),
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    /// Sets the terminal area used to map mouse positions to cells.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    fn is_ai_thinking(&self) -> bool {
        !self.state.is_over() && self.state.current_turn() == Side::Ai
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let snapshot = self.state.snapshot();
        let [title_area, turn_area, board_area, status_area, help_area] =
            screen_layout(frame.area());

        let title = Text::styled("Tic Tac Toe", style::TITLE).centered();
        let board = BoardDisplay::new(&snapshot).cursor(self.cursor);
        let mut status = StatusDisplay::new(&snapshot);
        if self.is_ai_thinking() {
            status = status.thinking(self.spinner_frame);
        }

        frame.render_widget(title, title_area);
        frame.render_widget(TurnDisplay::new(&snapshot), turn_area);
        frame.render_widget(board, board_area);
        frame.render_widget(status, status_area);
        frame.render_widget(HelpDisplay::new(self.state.is_over()), help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char(c @ '1'..='9') => {
                    let index = usize::from(c as u8 - b'1');
                    self.cursor = index;
                    self.play_player_move(index);
                }
                KeyCode::Left => self.move_cursor(0, -1),
                KeyCode::Right => self.move_cursor(0, 1),
                KeyCode::Up => self.move_cursor(-1, 0),
                KeyCode::Down => self.move_cursor(1, 0),
                KeyCode::Enter | KeyCode::Char(' ') => self.play_player_move(self.cursor),
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let [_, _, board_area, _, _] = screen_layout(self.area);
                if let Some(index) = BoardDisplay::cell_at(board_area, mouse.column, mouse.row) {
                    self.cursor = index;
                    self.play_player_move(index);
                }
            }
            Event::Resize(width, height) => self.set_area(Rect::new(0, 0, *width, *height)),
            _ => {}
        }
    }

    /// Advances the spinner and plays the AI's move once its delay has passed.
    pub fn update(&mut self, now: Instant) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if !self.is_ai_thinking() {
            self.ai_due = None;
            return;
        }
        let due = *self.ai_due.get_or_insert(now + self.ai_delay);
        if now < due {
            return;
        }
        self.ai_due = None;
        self.play_ai_move();
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let last = BOARD_SIDE - 1;
        let row = (self.cursor / BOARD_SIDE)
            .saturating_add_signed(d_row)
            .min(last);
        let col = (self.cursor % BOARD_SIDE)
            .saturating_add_signed(d_col)
            .min(last);
        self.cursor = row * BOARD_SIDE + col;
    }

    fn play_player_move(&mut self, index: usize) {
        // Taps on occupied cells, during the AI's turn or after the game are ignored.
        if let Err(e) = self.state.apply_move(index, Side::Player) {
            tracing::debug!(error = %e, "input ignored");
            return;
        }
        if let Some(outcome) = self.state.outcome() {
            tracing::info!(%outcome, "game finished");
        }
    }

    fn play_ai_move(&mut self) {
        let index = match self.ai.choose_move(&self.state) {
            Ok(index) => index,
            Err(e) => {
                tracing::error!(error = %e, board = %self.state.board(), "AI could not move");
                return;
            }
        };
        if let Err(e) = self.state.apply_move(index, Side::Ai) {
            tracing::error!(error = %e, "AI move rejected");
            return;
        }
        if let Some(outcome) = self.state.outcome() {
            tracing::info!(%outcome, "game finished");
        }
    }

    fn new_game(&mut self) {
        tracing::info!("new game");
        self.state.reset();
        self.ai_due = None;
        self.cursor = CENTER_CELL;
    }
}

fn screen_layout(area: Rect) -> [Rect; 5] {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(BoardDisplay::HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area)
}
