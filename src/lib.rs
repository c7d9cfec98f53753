//! Circuit Trace Search Library
//!
//! Provides the core functionality for enumerating every shortest trace
//! between the start and end components of a circuit board: the board
//! parser, the partial-trace search states, and the search driver with
//! its swappable stack/queue frontier.

pub mod board;
pub mod error;
pub mod frontier;
pub mod search;
pub mod trace;

pub use board::{Board, Cell, Coord};
pub use error::{BoardError, FormatViolation};
pub use frontier::{Discipline, Frontier};
pub use trace::TraceState;
