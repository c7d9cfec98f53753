//! Exhaustive shortest-trace search driver.
//!
//! Seeds the frontier with a one-cell trace at every open neighbor of
//! the start component, then drains it: solutions fold into the best-set
//! accumulator, everything else expands into one successor per open
//! neighbor of the head. Every leaf of the expansion tree is visited, so
//! the surviving set is exactly the set of minimum-length traces,
//! whatever the frontier discipline.

use crate::board::{Board, Coord};
use crate::frontier::Frontier;
use crate::trace::TraceState;

/// Neighbor probe offsets in `(row, col)` form: down, up, right, left.
///
/// Used for both seeding and expansion. The order shapes discovery order
/// within a discipline, never the returned set.
const NEIGHBOR_OFFSETS: [Coord; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Finds every shortest trace from the board's start to its end.
///
/// Returns the co-optimal solutions in discovery order; the vector is
/// empty when no trace exists.
pub fn shortest_traces(board: &Board, mut frontier: Frontier<TraceState>) -> Vec<TraceState> {
    let (start_row, start_col) = board.start();
    for (d_row, d_col) in NEIGHBOR_OFFSETS {
        if board.is_open(start_row + d_row, start_col + d_col) {
            frontier.store(TraceState::seed(board, start_row + d_row, start_col + d_col));
        }
    }

    let mut best: Vec<TraceState> = Vec::new();
    while let Some(current) = frontier.retrieve() {
        if current.is_solution() {
            // solutions are never expanded further
            match best.first().map(TraceState::path_length) {
                None => best.push(current),
                Some(len) if current.path_length() == len => best.push(current),
                Some(len) if current.path_length() < len => {
                    best.clear();
                    best.push(current);
                }
                Some(_) => {}
            }
        } else {
            let (head_row, head_col) = current.head();
            for (d_row, d_col) in NEIGHBOR_OFFSETS {
                if current.is_open(head_row + d_row, head_col + d_col) {
                    frontier.store(TraceState::extend(
                        &current,
                        head_row + d_row,
                        head_col + d_col,
                    ));
                }
            }
        }
    }
    best
}
