use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use tictactoe_engine::{GameSnapshot, Side};

use crate::view::widgets::style;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Whose turn it is, or that the game is over.
#[derive(Debug)]
pub struct TurnDisplay<'a> {
    snapshot: &'a GameSnapshot,
}

impl<'a> TurnDisplay<'a> {
    pub fn new(snapshot: &'a GameSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Widget for TurnDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.snapshot.outcome.is_some() {
            Line::from("Game over")
        } else {
            match self.snapshot.current_turn {
                Side::Player => Line::styled("Player's turn (X)", style::PLAYER_MARK),
                Side::Ai => Line::styled("AI's turn (O)", style::AI_MARK),
            }
        };
        line.centered().render(area, buf);
    }
}

/// Spinner while the AI is thinking, outcome message once the game is decided.
#[derive(Debug)]
pub struct StatusDisplay<'a> {
    snapshot: &'a GameSnapshot,
    spinner_frame: Option<usize>,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(snapshot: &'a GameSnapshot) -> Self {
        Self {
            snapshot,
            spinner_frame: None,
        }
    }

    /// Shows the thinking spinner at the given animation frame.
    pub fn thinking(self, frame: usize) -> Self {
        Self {
            spinner_frame: Some(frame),
            ..self
        }
    }
}

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(outcome) = self.snapshot.outcome {
            Line::styled(outcome.to_string(), style::OUTCOME)
        } else if let Some(frame) = self.spinner_frame {
            Line::from(vec![
                Span::styled(SPINNER[frame % SPINNER.len()], style::THINKING),
                Span::styled(" AI is thinking...", style::THINKING),
            ])
        } else {
            Line::default()
        };
        line.centered().render(area, buf);
    }
}
