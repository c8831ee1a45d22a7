use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Mark, MatchScore, RoundOutcome};

/// Recorded match, as written by `--save-recording`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedMatch {
    /// Timestamp when the recording was written (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Score at the time the program exited
    pub final_score: MatchScore,
    /// Most recent rounds, oldest first
    pub rounds: Vec<RoundRecord>,
}

/// One round, from an empty board until it ended or was abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Match number (1-based, increments on every match reset)
    pub match_number: usize,
    /// Round number within the match (1-based)
    pub round: usize,
    /// Mark that opened the round
    pub starting_player: Mark,
    /// Accepted cell indices, in play order
    pub moves: Vec<usize>,
    /// Outcome when the round was closed; `InProgress` if it was abandoned
    pub outcome: RoundOutcome,
}
