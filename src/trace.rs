//! Partial-trace search states.
//!
//! A `TraceState` is a snapshot of a trace under construction: a private
//! board copy with every path cell stamped as `Trace`, the head
//! coordinate, and the path length. States are immutable once built; the
//! search grows them by cloning, so sibling states never share grid
//! state.

use crate::board::{Board, Cell, Coord};

/// A partial trace: its own board copy, the head cell, and the count of
/// `Trace` cells stamped so far.
#[derive(Clone)]
pub struct TraceState {
    board: Board,
    head: Coord,
    path_length: usize,
}

impl TraceState {
    /// Seeds a one-cell trace at an open cell adjacent to the board's
    /// start component.
    pub fn seed(board: &Board, row: i32, col: i32) -> TraceState {
        debug_assert!(
            adjacent((row, col), board.start()),
            "seed ({row}, {col}) must neighbor the start component"
        );
        let mut board = board.clone();
        board.mark(row, col, Cell::Trace);
        TraceState {
            board,
            head: (row, col),
            path_length: 1,
        }
    }

    /// Extends a parent trace by one open cell adjacent to its head.
    pub fn extend(parent: &TraceState, row: i32, col: i32) -> TraceState {
        debug_assert!(
            adjacent((row, col), parent.head),
            "extension ({row}, {col}) must neighbor the head"
        );
        let mut board = parent.board.clone();
        board.mark(row, col, Cell::Trace);
        TraceState {
            board,
            head: (row, col),
            path_length: parent.path_length + 1,
        }
    }

    /// True iff `(row, col)` is open on this state's board.
    ///
    /// Cells already on the path are `Trace`, not `Open`, which is the
    /// only cycle check the search needs.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        self.board.is_open(row, col)
    }

    /// The most recently stamped cell.
    pub fn head(&self) -> Coord {
        self.head
    }

    /// Number of `Trace` cells stamped so far.
    pub fn path_length(&self) -> usize {
        self.path_length
    }

    /// True iff the head sits orthogonally adjacent to the end component.
    ///
    /// The end cell itself is never overwritten, so a rendered solution
    /// shows the trace bracketed by `1` and `2`.
    pub fn is_solution(&self) -> bool {
        adjacent(self.head, self.board.end())
    }

    /// The rendered board behind this state.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// True iff two coordinates are 4-adjacent (Manhattan distance 1).
fn adjacent((a_row, a_col): Coord, (b_row, b_col): Coord) -> bool {
    (a_row - b_row).abs() + (a_col - b_col).abs() == 1
}
