use std::fmt;

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Number of cells along one side of the board.
pub const BOARD_SIDE: usize = 3;
/// Total number of cells, indexed `0..CELL_COUNT` in row-major order.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The 3×3 grid.
///
/// Cells are indexed 0-8 in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// --+---+--
/// 3 | 4 | 5
/// --+---+--
/// 6 | 7 | 8
/// ```
///
/// A cell is either empty (`None`) or holds exactly one [`Mark`]. Once a mark is
/// placed it is never changed; the only way back to an empty cell is a fresh
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [None; CELL_COUNT],
    };

    /// Builds a board from raw cells.
    ///
    /// No legality check is made, so any arrangement (including ones that
    /// cannot arise in play) can be evaluated with [`detect_outcome`].
    ///
    /// [`detect_outcome`]: crate::detect_outcome
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the mark at `index`, or `None` if the cell is empty or `index`
    /// is off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Returns `true` if `index` is on the board and the cell is empty.
    #[must_use]
    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells, which equals the number of moves played.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    #[must_use]
    pub const fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Iterates over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Mark>]> {
        self.cells.chunks_exact(BOARD_SIDE)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.is_cell_empty(index));
        self.cells[index] = Some(mark);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str("|")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}
