#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Tic-tac-toe game state with a replayable move history.
//!
//! [`GameHistory`] keeps every board the game has passed through and a
//! pointer to the one currently shown. Playing from an earlier point drops
//! the boards that came after it.

pub mod error;
pub mod history;
pub mod status;
pub mod winner;

pub use error::{MoveRejected, OutOfRange};
pub use history::{GameHistory, MoveEntry};
pub use status::GameStatus;
pub use tactoe_types::{Cell, Mark, Snapshot, Square};
pub use winner::{evaluate, winning_line, WinningLine};
