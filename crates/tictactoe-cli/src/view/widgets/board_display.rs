use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Position, Rect},
    text::Text,
    widgets::{Block as BlockWidget, Widget},
};
use tictactoe_engine::{BOARD_SIDE, Board, Cell, GameSnapshot};

use crate::view::widgets::style;

/// Renders the 3×3 grid of a [`GameSnapshot`].
///
/// Each cell is drawn as a bordered box. The grid has a fixed size and is
/// centered in the render area; [`BoardDisplay::cell_at`] maps a terminal
/// position back to the cell index drawn there.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    snapshot: &'a GameSnapshot,
    cursor: Option<usize>,
}

impl<'a> BoardDisplay<'a> {
    pub const CELL_WIDTH: u16 = 9;
    pub const CELL_HEIGHT: u16 = 5;
    #[expect(clippy::cast_possible_truncation)]
    pub const WIDTH: u16 = Self::CELL_WIDTH * BOARD_SIDE as u16;
    #[expect(clippy::cast_possible_truncation)]
    pub const HEIGHT: u16 = Self::CELL_HEIGHT * BOARD_SIDE as u16;

    pub fn new(snapshot: &'a GameSnapshot) -> Self {
        Self {
            snapshot,
            cursor: None,
        }
    }

    pub fn cursor(self, cursor: usize) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    /// Returns the area occupied by the grid when rendered into `area`.
    pub fn grid_rect(area: Rect) -> Rect {
        area.centered(
            Constraint::Length(Self::WIDTH),
            Constraint::Length(Self::HEIGHT),
        )
    }

    /// Returns the index of the cell drawn at terminal position `(column, row)`.
    pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
        let grid = Self::grid_rect(area);
        if !grid.contains(Position::new(column, row)) {
            return None;
        }
        let col = usize::from((column - grid.x) / Self::CELL_WIDTH);
        let row = usize::from((row - grid.y) / Self::CELL_HEIGHT);
        Board::index_of(row, col)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn cell_rect(grid: Rect, index: usize) -> Rect {
        let row = (index / BOARD_SIDE) as u16;
        let col = (index % BOARD_SIDE) as u16;
        Rect::new(
            grid.x + col * Self::CELL_WIDTH,
            grid.y + row * Self::CELL_HEIGHT,
            Self::CELL_WIDTH,
            Self::CELL_HEIGHT,
        )
        .intersection(grid)
    }

    fn cell_text(index: usize, cell: Cell) -> Text<'static> {
        match cell {
            Cell::Empty => Text::styled((index + 1).to_string(), style::CELL_HINT),
            Cell::PlayerMark => Text::styled("X", style::PLAYER_MARK),
            Cell::AiMark => Text::styled("O", style::AI_MARK),
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = BoardDisplay::grid_rect(area).intersection(area);
        let in_progress = self.snapshot.outcome.is_none();

        for (index, cell) in self.snapshot.board.cells().iter().copied().enumerate() {
            let is_winning = self
                .snapshot
                .winning_line
                .is_some_and(|line| line.contains(&index));
            let border_style = if is_winning {
                style::WINNING_BORDER
            } else if in_progress && self.cursor == Some(index) {
                style::CURSOR_BORDER
            } else {
                style::CELL_BORDER
            };
            let block = BlockWidget::bordered().border_style(border_style);
            let cell_area = BoardDisplay::cell_rect(grid, index);
            let inner = block.inner(cell_area);
            block.render(cell_area, buf);

            let text_area = inner.centered_vertically(Constraint::Length(1));
            BoardDisplay::cell_text(index, cell)
                .centered()
                .render(text_area, buf);
        }
    }
}
