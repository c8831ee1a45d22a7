use std::{
    collections::VecDeque,
    fs::{self, File},
    io::{BufWriter, Write as _},
    mem,
    ops::Deref,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use tictactoe_engine::{GameEngine, MatchScore, PlaceMarkError, RoundOutcome};
use tracing::info;

use crate::schema::record::{RecordedMatch, RoundRecord};

/// A wrapper around [`GameEngine`] that records every round played.
///
/// Offers the same mutating operations as `GameEngine`. Accepted placements are
/// appended to the current round; the round is closed into a [`RoundRecord`]
/// whenever its board is cleared, and once more by
/// [`into_history`](Self::into_history) for the round on screen at exit.
#[derive(Debug)]
pub struct RecordingEngine {
    engine: GameEngine,
    match_number: usize,
    round: usize,
    moves: Vec<usize>,
    rounds: RingBuffer<RoundRecord>,
}

/// Read-only access to the underlying `GameEngine`.
///
/// There is no `DerefMut`: mutations go through
/// `RecordingEngine` so every accepted move is recorded.
impl Deref for RecordingEngine {
    type Target = GameEngine;

    fn deref(&self) -> &Self::Target {
        &self.engine
    }
}

impl RecordingEngine {
    /// Creates a recorder for a fresh match keeping at most `history_size`
    /// rounds.
    pub fn new(history_size: usize) -> Self {
        Self {
            engine: GameEngine::new(),
            match_number: 1,
            round: 1,
            moves: vec![],
            rounds: RingBuffer::with_capacity(history_size),
        }
    }

    /// Closes the current round and returns the recording.
    pub fn into_history(mut self) -> MatchHistory {
        self.close_round();
        MatchHistory {
            final_score: *self.engine.score(),
            rounds: self.rounds,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<RoundOutcome, PlaceMarkError> {
        let outcome = self.engine.place_mark(index)?;
        self.moves.push(index);
        Ok(outcome)
    }

    pub fn start_next_round(&mut self) {
        self.close_round();
        self.engine.start_next_round();
    }

    pub fn reset_board(&mut self) {
        self.close_round();
        self.engine.reset_board();
    }

    pub fn reset_match(&mut self) {
        self.close_round();
        self.engine.reset_match();
        self.match_number += 1;
        self.round = 1;
    }

    /// Stores the current round if any move was played in it.
    fn close_round(&mut self) {
        if self.moves.is_empty() {
            return;
        }
        self.rounds.push(RoundRecord {
            match_number: self.match_number,
            round: self.round,
            starting_player: self.engine.starting_player(),
            moves: mem::take(&mut self.moves),
            outcome: self.engine.outcome(),
        });
        self.round += 1;
    }
}

/// Rounds recorded during one program run.
///
/// Created by [`RecordingEngine::into_history`]; written out with
/// [`save`](Self::save).
#[derive(Debug)]
pub struct MatchHistory {
    final_score: MatchScore,
    rounds: RingBuffer<RoundRecord>,
}

impl MatchHistory {
    #[cfg(test)]
    fn rounds(&self) -> Vec<RoundRecord> {
        self.rounds.to_vec()
    }

    /// Saves the recording as JSON and returns the path written.
    ///
    /// The filename is generated from the current UTC time:
    /// `match_{YYYYMMDD_HHMMSS}.json`. `record_dir` is created if needed.
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let timestamp = Utc::now();
        let filename = format!("match_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
        let filepath = record_dir.join(filename);

        let data = RecordedMatch {
            recorded_at: timestamp,
            final_score: self.final_score,
            rounds: self.rounds.to_vec(),
        };

        let file = File::create(&filepath)
            .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &data)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

        info!(path = %filepath.display(), rounds = data.rounds.len(), "recording saved");
        Ok(filepath)
    }
}

/// A fixed-capacity ring buffer that drops the oldest entry when full.
#[derive(Debug)]
struct RingBuffer<T> {
    capacity: usize,
    buf: VecDeque<T>,
}

impl<T> RingBuffer<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            buf: VecDeque::with_capacity(capacity),
        }
    }

    fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() >= self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(item);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.iter().cloned().collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use tictactoe_engine::{Mark, WinLine};

    use super::*;

    fn play(engine: &mut RecordingEngine, moves: &[usize]) {
        for &index in moves {
            engine.place_mark(index).unwrap();
        }
    }

    #[test]
    fn test_ring_buffer_overwrites_oldest_when_full() {
        let mut buf = RingBuffer::with_capacity(3);
        for i in 1..=5 {
            buf.push(i);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_ring_buffer_capacity_zero() {
        let mut buf = RingBuffer::with_capacity(0);
        buf.push(1);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_rejected_moves_are_not_recorded() {
        let mut engine = RecordingEngine::new(10);
        play(&mut engine, &[4]);
        assert!(engine.place_mark(4).is_err());
        assert!(engine.place_mark(9).is_err());

        let rounds = engine.into_history().rounds();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].moves, vec![4]);
        assert_eq!(rounds[0].outcome, RoundOutcome::InProgress);
    }

    #[test]
    fn test_rounds_are_closed_on_each_transition() {
        let mut engine = RecordingEngine::new(10);
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.start_next_round();
        play(&mut engine, &[4, 0]);
        engine.reset_board();
        play(&mut engine, &[8]);
        engine.reset_match();
        play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        let history = engine.into_history();
        let rounds = history.rounds();
        assert_eq!(
            rounds,
            vec![
                RoundRecord {
                    match_number: 1,
                    round: 1,
                    starting_player: Mark::First,
                    moves: vec![0, 3, 1, 4, 2],
                    outcome: RoundOutcome::Won {
                        mark: Mark::First,
                        line: WinLine::ALL[0],
                    },
                },
                RoundRecord {
                    match_number: 1,
                    round: 2,
                    starting_player: Mark::Second,
                    moves: vec![4, 0],
                    outcome: RoundOutcome::InProgress,
                },
                RoundRecord {
                    match_number: 1,
                    round: 3,
                    starting_player: Mark::Second,
                    moves: vec![8],
                    outcome: RoundOutcome::InProgress,
                },
                RoundRecord {
                    match_number: 2,
                    round: 1,
                    starting_player: Mark::First,
                    moves: vec![0, 1, 2, 4, 3, 5, 7, 6, 8],
                    outcome: RoundOutcome::Draw,
                },
            ]
        );
        assert_eq!(history.final_score.draws(), 1);
        assert_eq!(history.final_score.wins(Mark::First), 0);
    }

    #[test]
    fn test_empty_rounds_are_skipped() {
        let mut engine = RecordingEngine::new(10);
        engine.reset_board();
        engine.start_next_round();
        assert!(engine.into_history().rounds().is_empty());
    }

    #[test]
    fn test_history_size_limits_rounds() {
        let mut engine = RecordingEngine::new(2);
        for _ in 0..3 {
            play(&mut engine, &[0, 3, 1, 4, 2]);
            engine.start_next_round();
        }
        let rounds = engine.into_history().rounds();
        assert_eq!(
            rounds.iter().map(|r| r.round).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn test_save_writes_json() {
        let dir = env::temp_dir().join(format!("tictactoe-record-test-{}", std::process::id()));
        let mut engine = RecordingEngine::new(10);
        play(&mut engine, &[0, 3, 1, 4, 2]);

        let path = engine.into_history().save(&dir).unwrap();
        let file = File::open(&path).unwrap();
        let json: serde_json::Value = serde_json::from_reader(file).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("match_")
        );
        assert_eq!(json["final_score"]["wins"], serde_json::json!([1, 0]));
        assert_eq!(json["rounds"][0]["moves"], serde_json::json!([0, 3, 1, 4, 2]));
        assert_eq!(json["rounds"][0]["starting_player"], "First");
        assert!(json["recorded_at"].is_string());
    }
}
