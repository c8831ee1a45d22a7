use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use tictactoe_engine::{BOARD_SIDE, CELL_COUNT};

/// Width of one board cell in terminal columns, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell in terminal rows, borders included.
pub const CELL_HEIGHT: u16 = 5;

#[expect(clippy::cast_possible_truncation)]
const SIDE: u16 = BOARD_SIDE as u16;

const BOARD_WIDTH: u16 = SIDE * CELL_WIDTH;
const BOARD_HEIGHT: u16 = SIDE * CELL_HEIGHT;
const SCOREBOARD_WIDTH: u16 = 26;

/// Screen regions of the play screen.
///
/// Both drawing and mouse hit-testing go through [`PlayLayout::new`], so a
/// click always maps to the cell that was drawn under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayLayout {
    pub title: Rect,
    pub status: Rect,
    pub board: Rect,
    pub cells: [Rect; CELL_COUNT],
    pub scoreboard: Rect,
    pub next_round: Rect,
    pub help: Rect,
}

impl PlayLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [title, status, _, main, _, next_round, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BOARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [board, _, scoreboard] = Layout::horizontal([
            Constraint::Length(BOARD_WIDTH),
            Constraint::Length(4),
            Constraint::Length(SCOREBOARD_WIDTH),
        ])
        .flex(Flex::Center)
        .areas(main);

        Self {
            title,
            status,
            board,
            cells: cell_areas(board),
            scoreboard,
            next_round,
            help,
        }
    }

    /// Returns the index of the board cell under a terminal position.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(position))
    }
}

/// Splits a board area into its nine cells, in row-major order.
#[must_use]
pub fn cell_areas(board: Rect) -> [Rect; CELL_COUNT] {
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); BOARD_SIDE]);
    let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); BOARD_SIDE]);

    let mut cells = [Rect::default(); CELL_COUNT];
    let row_areas: [Rect; BOARD_SIDE] = rows.areas(board);
    for (y, row) in row_areas.into_iter().enumerate() {
        let col_areas: [Rect; BOARD_SIDE] = cols.areas(row);
        for (x, cell) in col_areas.into_iter().enumerate() {
            cells[y * BOARD_SIDE + x] = cell;
        }
    }
    cells
}
