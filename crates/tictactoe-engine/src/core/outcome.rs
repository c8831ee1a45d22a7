use serde::{Deserialize, Serialize};

use super::{board::Board, mark::Mark, win_line::WinLine};

/// State of a round as derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum RoundOutcome {
    InProgress,
    Won { mark: Mark, line: WinLine },
    Draw,
}

impl RoundOutcome {
    /// Returns `true` for `Won` and `Draw`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }

    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::Won { mark, .. } => Some(mark),
            Self::InProgress | Self::Draw => None,
        }
    }

    #[must_use]
    pub fn winning_line(self) -> Option<WinLine> {
        match self {
            Self::Won { line, .. } => Some(line),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// Evaluates a board.
///
/// Lines are checked in [`WinLine::ALL`] order and the first complete one wins.
/// A full board with no complete line is a draw.
#[must_use]
pub fn detect_outcome(board: &Board) -> RoundOutcome {
    WinLine::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|mark| RoundOutcome::Won { mark, line }))
        .unwrap_or_else(|| {
            if board.is_full() {
                RoundOutcome::Draw
            } else {
                RoundOutcome::InProgress
            }
        })
}
