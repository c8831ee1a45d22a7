use crate::core::{mark::Mark, outcome::RoundOutcome};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Status {
    #[display("Winner: {_0}")]
    Winner(Mark),
    #[display("It's a draw!")]
    Draw,
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

impl Status {
    /// Derives the status from a round outcome and the mark due to move.
    #[must_use]
    pub const fn new(outcome: RoundOutcome, turn: Mark) -> Self {
        match outcome {
            RoundOutcome::Won { mark, .. } => Self::Winner(mark),
            RoundOutcome::Draw => Self::Draw,
            RoundOutcome::InProgress => Self::NextPlayer(turn),
        }
    }
}
