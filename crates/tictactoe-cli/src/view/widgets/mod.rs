pub use self::{board_display::*, help_display::*, status_display::*};

mod board_display;
mod help_display;
mod status_display;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const TITLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const PLAYER_MARK: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const AI_MARK: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
    pub const CELL_HINT: Style = Style::new().fg(Color::DarkGray);
    pub const CELL_BORDER: Style = Style::new().fg(Color::Gray);
    pub const CURSOR_BORDER: Style = Style::new().fg(Color::Yellow);
    pub const WINNING_BORDER: Style = Style::new().fg(Color::Green);
    pub const THINKING: Style = Style::new().fg(Color::Red);
    pub const OUTCOME: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new().fg(Color::Cyan);
    pub const SEPARATOR: Style = Style::new().fg(Color::DarkGray);
    pub const DESCRIPTION: Style = Style::new().fg(Color::White);
}
