//! Match-level game logic.
//!
//! - [`GameEngine`] - Owns the board, the turn, the starting player rotation
//!   and the score of one match
//! - [`MatchScore`] - Wins per mark and draws, accumulated across rounds
//! - [`Status`] - One-line summary of the round for display
//!
//! # Match Flow
//!
//! 1. A match starts with an empty board and [`Mark::First`] to move
//! 2. Players alternate [`GameEngine::place_mark`] until a line is completed
//!    or the board fills up; the score is updated on that final move
//! 3. [`GameEngine::start_next_round`] clears the board and hands the opening
//!    move to the other player
//! 4. Repeat; [`GameEngine::reset_match`] starts over from zero
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, RoundOutcome, WinLine};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.place_mark(index).unwrap();
//! }
//! let outcome = engine.place_mark(2).unwrap();
//!
//! assert_eq!(
//!     outcome,
//!     RoundOutcome::Won { mark: Mark::First, line: WinLine::ALL[0] }
//! );
//! assert_eq!(engine.score().wins(Mark::First), 1);
//!
//! // The board is frozen until the next round starts.
//! assert!(engine.place_mark(8).is_err());
//!
//! engine.start_next_round();
//! assert_eq!(engine.turn(), Mark::Second);
//! ```
//!
//! [`Mark::First`]: crate::Mark::First

pub use self::{game_engine::*, match_score::*, status::*};

mod game_engine;
mod match_score;
mod status;
