//! Game-state machine for a two-player 3×3 grid game.
//!
//! The crate is split the same way the game is:
//!
//! - [`core`] - Plain data: [`Mark`], [`Board`], the fixed [`WinLine`] table and
//!   the pure [`detect_outcome`] function.
//! - [`engine`] - [`GameEngine`], which owns one board, the turn, the starting
//!   player rotation and the running [`MatchScore`] of a match.
//!
//! Nothing here draws, reads input or touches the filesystem. A renderer reads
//! the engine state and forwards user input to the engine's operations.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a placement was refused.
///
/// A refused placement leaves the engine untouched. Renderers are expected to
/// ignore it, which is why this is a value rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceMarkError {
    #[display("cell index {index} is outside the board")]
    OutOfRange { index: usize },
    #[display("cell {index} is already occupied")]
    CellOccupied { index: usize },
    #[display("the round is already over")]
    RoundOver,
}
