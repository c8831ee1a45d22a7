use serde::{Deserialize, Serialize};

use crate::core::{mark::Mark, outcome::RoundOutcome};

/// Running score of a match.
///
/// Counters only go up while a match is in progress; the only way to lower
/// them is to start a new match.
///
/// # Example
///
/// ```
/// use tictactoe_engine::{GameEngine, Mark};
///
/// let mut engine = GameEngine::new();
/// for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
///     engine.place_mark(index).unwrap();
/// }
///
/// let score = engine.score();
/// assert_eq!(score.draws(), 1);
/// assert_eq!(score.wins(Mark::First), 0);
/// assert_eq!(score.rounds_completed(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchScore {
    wins: [usize; 2],
    draws: usize,
}

impl MatchScore {
    /// Creates a score with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: [0; 2],
            draws: 0,
        }
    }

    /// Returns the number of rounds won by `mark`.
    #[must_use]
    pub const fn wins(&self, mark: Mark) -> usize {
        self.wins[mark.index()]
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the number of rounds that reached a terminal outcome.
    #[must_use]
    pub const fn rounds_completed(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }

    /// Counts a round outcome. `InProgress` is ignored.
    pub(crate) const fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::InProgress => {}
            RoundOutcome::Won { mark, .. } => self.wins[mark.index()] += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }
}
