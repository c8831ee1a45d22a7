use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block as BlockWidget, BorderType, Widget},
};
use tictactoe_engine::{Board, WinLine};

use crate::view::{layout::cell_areas, widgets::style};

/// The 3×3 grid.
///
/// Empty cells show their 1-9 key as a dim hint. Cells of the winning line get
/// a highlighted border, the cursor cell a thick one.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    winning_line: Option<WinLine>,
    cursor: Option<usize>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            winning_line: None,
            cursor: None,
        }
    }

    pub fn winning_line(self, line: Option<WinLine>) -> Self {
        Self {
            winning_line: line,
            ..self
        }
    }

    pub fn cursor(self, cursor: Option<usize>) -> Self {
        Self { cursor, ..self }
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
        for (index, cell_area) in cell_areas(area).into_iter().enumerate() {
            let on_winning_line = self.winning_line.is_some_and(|line| line.contains(index));
            let is_cursor = self.cursor == Some(index);

            let border_style = if on_winning_line {
                style::WINNING_CELL
            } else if is_cursor {
                style::CURSOR_BORDER
            } else {
                style::CELL_BORDER
            };
            let border_type = if is_cursor {
                BorderType::Thick
            } else {
                BorderType::Rounded
            };
            let block = BlockWidget::bordered()
                .border_type(border_type)
                .border_style(border_style);
            let inner = block.inner(cell_area);
            block.render(cell_area, buf);

            let content = match self.board.get(index) {
                Some(mark) => Span::styled(mark.to_string(), style::mark(mark)),
                None => Span::styled((index + 1).to_string(), style::DIM),
            };
            let middle_row = Rect {
                y: inner.y + inner.height / 2,
                height: inner.height.min(1),
                ..inner
            };
            Line::from(content).centered().render(middle_row, buf);
        }
    }
}
