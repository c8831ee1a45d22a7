use std::fmt;

use serde::{Deserialize, Serialize};

use super::{board::Board, mark::Mark};

/// Three cell indices that win the round when one mark holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Every winning line, in evaluation order.
    ///
    /// The order is significant: when more than one line is complete, the
    /// first one listed here is the one reported.
    pub const ALL: [Self; 8] = [
        // Rows
        Self([0, 1, 2]),
        Self([3, 4, 5]),
        Self([6, 7, 8]),
        // Columns
        Self([0, 3, 6]),
        Self([1, 4, 7]),
        Self([2, 5, 8]),
        // Diagonals
        Self([0, 4, 8]),
        Self([2, 4, 6]),
    ];

    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        self.0
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns the mark occupying all three cells of this line, if any.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}
