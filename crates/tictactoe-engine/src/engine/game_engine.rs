use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::{
    PlaceMarkError,
    core::{
        board::{Board, CELL_COUNT},
        mark::Mark,
        outcome::{RoundOutcome, detect_outcome},
    },
};

use super::{match_score::MatchScore, status::Status};

/// State machine for one match.
///
/// Owns the board of the current round, the mark due to move, the mark that
/// opened the current round and the running score. Every operation runs to
/// completion synchronously; callers read the state back through the
/// accessors after each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    starting_player: Mark,
    score: MatchScore,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Mark that opens a fresh match.
    pub const DEFAULT_STARTING_PLAYER: Mark = Mark::First;

    /// Creates an engine at the start of a match.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::EMPTY,
            turn: Self::DEFAULT_STARTING_PLAYER,
            starting_player: Self::DEFAULT_STARTING_PLAYER,
            score: MatchScore::new(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    #[must_use]
    pub const fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the mark that opened the current round.
    #[must_use]
    pub const fn starting_player(&self) -> Mark {
        self.starting_player
    }

    #[must_use]
    pub const fn score(&self) -> &MatchScore {
        &self.score
    }

    /// Evaluates the current board.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        detect_outcome(&self.board)
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status::new(self.outcome(), self.turn)
    }

    /// Number of marks placed in the current round.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.board.filled_count()
    }

    /// Places the current player's mark on `index`.
    ///
    /// On success the turn passes to the other player, even when the move
    /// ends the round, and a terminal outcome is added to the score.
    ///
    /// A placement on a finished round, off the board, or on an occupied cell
    /// is refused and leaves every part of the engine unchanged.
    pub fn place_mark(&mut self, index: usize) -> Result<RoundOutcome, PlaceMarkError> {
        if let Err(err) = self.check_placement(index) {
            trace!(index, turn = %self.turn, %err, "placement rejected");
            return Err(err);
        }

        let mark = self.turn;
        self.board.set(index, mark);
        let outcome = detect_outcome(&self.board);
        self.score.record(outcome);
        self.turn = mark.opponent();

        debug!(index, %mark, moves = self.moves_played(), "mark placed");
        match outcome {
            RoundOutcome::InProgress => {}
            RoundOutcome::Won { mark, line } => {
                info!(winner = %mark, %line, score = ?self.score, "round won");
            }
            RoundOutcome::Draw => info!(score = ?self.score, "round drawn"),
        }

        Ok(outcome)
    }

    fn check_placement(&self, index: usize) -> Result<(), PlaceMarkError> {
        if self.is_round_over() {
            return Err(PlaceMarkError::RoundOver);
        }
        if index >= CELL_COUNT {
            return Err(PlaceMarkError::OutOfRange { index });
        }
        if !self.board.is_cell_empty(index) {
            return Err(PlaceMarkError::CellOccupied { index });
        }
        Ok(())
    }

    /// Clears the board and gives the opening move to the other player.
    ///
    /// The score is kept.
    pub fn start_next_round(&mut self) {
        self.board = Board::EMPTY;
        self.starting_player = self.starting_player.opponent();
        self.turn = self.starting_player;
        debug!(starting_player = %self.starting_player, "next round started");
    }

    /// Clears the board and restarts the current round with the same opener.
    ///
    /// The score and the starting player are kept.
    pub fn reset_board(&mut self) {
        self.board = Board::EMPTY;
        self.turn = self.starting_player;
        debug!(starting_player = %self.starting_player, "board reset");
    }

    /// Starts a new match: empty board, zero score, default opener.
    pub fn reset_match(&mut self) {
        *self = Self::new();
        debug!("match reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::win_line::WinLine;

    fn play(engine: &mut GameEngine, moves: &[usize]) -> Vec<RoundOutcome> {
        moves
            .iter()
            .map(|&index| {
                engine
                    .place_mark(index)
                    .unwrap_or_else(|err| panic!("move {index} rejected: {err}"))
            })
            .collect()
    }

    const FIRST_ROW_WIN: [usize; 5] = [0, 3, 1, 4, 2];
    const DRAW: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.board(), &Board::EMPTY);
        assert_eq!(engine.turn(), Mark::First);
        assert_eq!(engine.starting_player(), Mark::First);
        assert_eq!(engine.score(), &MatchScore::new());
        assert_eq!(engine.outcome(), RoundOutcome::InProgress);
        assert_eq!(engine.status(), Status::NextPlayer(Mark::First));
        assert_eq!(engine, GameEngine::default());
    }

    #[test]
    fn test_first_row_scenario() {
        let mut engine = GameEngine::new();
        let outcomes = play(&mut engine, &FIRST_ROW_WIN);

        assert!(outcomes[..4].iter().all(|o| o.is_in_progress()));
        assert_eq!(
            outcomes[4],
            RoundOutcome::Won {
                mark: Mark::First,
                line: WinLine::ALL[0],
            }
        );
        assert_eq!(outcomes[4].winning_line().unwrap().indices(), [0, 1, 2]);
        assert_eq!(engine.score().wins(Mark::First), 1);
        assert_eq!(engine.score().wins(Mark::Second), 0);
        assert_eq!(engine.score().draws(), 0);
        assert_eq!(engine.status().to_string(), "Winner: X");
    }

    #[test]
    fn test_draw_scenario() {
        let mut engine = GameEngine::new();
        let outcomes = play(&mut engine, &DRAW);

        assert!(outcomes[..8].iter().all(|o| o.is_in_progress()));
        assert_eq!(outcomes[8], RoundOutcome::Draw);
        assert_eq!(engine.score().draws(), 1);
        assert_eq!(engine.score().rounds_completed(), 1);
        assert_eq!(engine.status().to_string(), "It's a draw!");
    }

    #[test]
    fn test_every_line_can_be_won_by_the_player_completing_it() {
        for line in WinLine::ALL {
            let [a, b, c] = line.indices();
            // Opponent moves go to cells off the line that cannot form a line
            // of their own in two moves.
            let others = (0..CELL_COUNT)
                .filter(|i| !line.contains(*i))
                .collect::<Vec<_>>();

            let mut engine = GameEngine::new();
            play(&mut engine, &[a, others[0], b, others[1]]);
            let outcome = engine.place_mark(c).unwrap();

            assert_eq!(
                outcome,
                RoundOutcome::Won {
                    mark: Mark::First,
                    line,
                },
                "line {line}",
            );
        }
    }

    #[test]
    fn test_turn_alternates_strictly() {
        let mut engine = GameEngine::new();
        for index in DRAW {
            let placed = engine.turn();
            engine.place_mark(index).unwrap();
            assert_eq!(engine.board().get(index), Some(placed));
            assert_ne!(engine.turn(), placed);
            assert_eq!(engine.moves_played() % 2 == 0, engine.turn() == Mark::First);
        }
    }

    #[test]
    fn test_turn_flips_on_terminal_move() {
        let mut engine = GameEngine::new();
        play(&mut engine, &FIRST_ROW_WIN);
        // First made the winning move, so Second is nominally next.
        assert_eq!(engine.turn(), Mark::Second);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[4]);
        let before = engine.clone();

        assert_eq!(
            engine.place_mark(4),
            Err(PlaceMarkError::CellOccupied { index: 4 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_change() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 8]);
        let before = engine.clone();

        for index in [CELL_COUNT, 42, usize::MAX] {
            assert_eq!(
                engine.place_mark(index),
                Err(PlaceMarkError::OutOfRange { index })
            );
        }
        assert_eq!(engine, before);
    }

    #[test]
    fn test_moves_after_win_are_rejected_without_change() {
        let mut engine = GameEngine::new();
        play(&mut engine, &FIRST_ROW_WIN);
        let before = engine.clone();

        for index in [5, 6, 7, 8, 0, CELL_COUNT] {
            assert_eq!(engine.place_mark(index), Err(PlaceMarkError::RoundOver));
        }
        assert_eq!(engine, before);
        assert_eq!(engine.score().rounds_completed(), 1);
    }

    #[test]
    fn test_moves_after_draw_are_rejected() {
        let mut engine = GameEngine::new();
        play(&mut engine, &DRAW);
        let before = engine.clone();

        assert_eq!(engine.place_mark(0), Err(PlaceMarkError::RoundOver));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_start_next_round_flips_starting_player() {
        let mut engine = GameEngine::new();
        play(&mut engine, &FIRST_ROW_WIN);

        engine.start_next_round();
        assert_eq!(engine.board(), &Board::EMPTY);
        assert_eq!(engine.starting_player(), Mark::Second);
        assert_eq!(engine.turn(), Mark::Second);
        assert_eq!(engine.score().wins(Mark::First), 1);

        engine.start_next_round();
        assert_eq!(engine.starting_player(), Mark::First);
        assert_eq!(engine.turn(), Mark::First);
        assert_eq!(engine.score().wins(Mark::First), 1);
    }

    #[test]
    fn test_second_player_opens_and_wins_next_round() {
        let mut engine = GameEngine::new();
        play(&mut engine, &FIRST_ROW_WIN);
        engine.start_next_round();

        let outcomes = play(&mut engine, &FIRST_ROW_WIN);
        assert_eq!(outcomes[4].winner(), Some(Mark::Second));
        assert_eq!(engine.score().wins(Mark::First), 1);
        assert_eq!(engine.score().wins(Mark::Second), 1);
    }

    #[test]
    fn test_reset_board_keeps_starting_player_and_score() {
        let mut engine = GameEngine::new();
        play(&mut engine, &DRAW);
        engine.start_next_round();
        play(&mut engine, &[0, 1, 2]);

        engine.reset_board();
        assert_eq!(engine.board(), &Board::EMPTY);
        assert_eq!(engine.starting_player(), Mark::Second);
        assert_eq!(engine.turn(), Mark::Second);
        assert_eq!(engine.score().draws(), 1);
    }

    #[test]
    fn test_reset_board_mid_round_does_not_score() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4]);
        engine.reset_board();

        assert_eq!(engine.score().rounds_completed(), 0);
        assert_eq!(engine.turn(), Mark::First);
    }

    #[test]
    fn test_reset_match() {
        let mut engine = GameEngine::new();
        play(&mut engine, &FIRST_ROW_WIN);
        engine.start_next_round();
        play(&mut engine, &[4, 0]);

        engine.reset_match();
        assert_eq!(engine, GameEngine::new());
        assert_eq!(engine.score().rounds_completed(), 0);
        assert_eq!(engine.starting_player(), Mark::First);
        assert_eq!(engine.turn(), Mark::First);
        assert_eq!(engine.board(), &Board::EMPTY);
    }

    #[test]
    fn test_score_counts_each_completed_round_once() {
        let rounds: [&[usize]; 6] = [
            &FIRST_ROW_WIN,
            &DRAW,
            &FIRST_ROW_WIN,
            &[0, 1, 3, 2, 6],
            &DRAW,
            &[4, 0, 2, 6, 3, 5, 8, 1],
        ];

        let mut engine = GameEngine::new();
        let mut completed = 0;
        for moves in rounds {
            let outcomes = play(&mut engine, moves);
            if outcomes.last().is_some_and(|o| o.is_terminal()) {
                completed += 1;
            }
            // Extra clicks after the round ends change nothing.
            _ = engine.place_mark(moves[0]);
            assert_eq!(engine.score().rounds_completed(), completed);
            engine.start_next_round();
        }

        let score = engine.score();
        assert_eq!(
            score.wins(Mark::First) + score.wins(Mark::Second) + score.draws(),
            completed
        );
        assert_eq!(score.draws(), 2);
    }
}
