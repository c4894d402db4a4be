use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::view::widgets::style;

/// Key and its description, e.g. `("N", "New game")`.
pub type KeyHelp = (&'static str, &'static str);

const PLAYING_HELP: &[KeyHelp] = &[
    ("1-9/Click", "Play cell"),
    ("←↑↓→", "Cursor"),
    ("Enter/Space", "Play cursor"),
    ("N", "New game"),
    ("Q/Esc", "Quit"),
];

const GAME_OVER_HELP: &[KeyHelp] = &[("N", "New game"), ("Q/Esc", "Quit")];

/// One-line list of the keys available in the current phase of the game.
#[derive(Debug)]
pub struct HelpDisplay {
    entries: &'static [KeyHelp],
}

impl HelpDisplay {
    pub fn new(game_over: bool) -> Self {
        let entries = if game_over {
            GAME_OVER_HELP
        } else {
            PLAYING_HELP
        };
        Self { entries }
    }
}

impl Widget for HelpDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];
        for (i, (key, description)) in self.entries.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", style::SEPARATOR));
            }
            spans.push(Span::styled(key, style::KEY));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(description, style::DESCRIPTION));
        }
        Line::from(spans).centered().render(area, buf);
    }
}
