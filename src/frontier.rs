//! Pending-state containers with swappable retrieval discipline.
//!
//! A frontier is an ordered container with `store`, `retrieve`, and
//! `is_empty`. The two variants share the interface and differ only in
//! which element `retrieve` returns: the stack hands back the most
//! recently stored element (depth-first search), the queue the least
//! recently stored (breadth-first). A tagged variant keeps the dispatch
//! in one `match` instead of a trait object.

use std::collections::VecDeque;

/// Which container backs the search frontier.
///
/// The discipline decides visit order only; the set of shortest traces
/// found is the same either way.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Discipline {
    /// LIFO frontier; the search expands depth-first.
    Stack,
    /// FIFO frontier; the search expands breadth-first.
    Queue,
}

impl Discipline {
    /// An empty frontier with this retrieval discipline.
    pub fn frontier<T>(self) -> Frontier<T> {
        match self {
            Discipline::Stack => Frontier::Stack(Vec::new()),
            Discipline::Queue => Frontier::Queue(VecDeque::new()),
        }
    }
}

/// Ordered container of pending elements.
pub enum Frontier<T> {
    /// Retrieves the most recently stored element.
    Stack(Vec<T>),
    /// Retrieves the least recently stored element.
    Queue(VecDeque<T>),
}

impl<T> Frontier<T> {
    /// Adds an element to the frontier.
    pub fn store(&mut self, element: T) {
        match self {
            Frontier::Stack(elements) => elements.push(element),
            Frontier::Queue(elements) => elements.push_back(element),
        }
    }

    /// Removes and returns the next element per the discipline, or
    /// `None` once the frontier has drained.
    pub fn retrieve(&mut self) -> Option<T> {
        match self {
            Frontier::Stack(elements) => elements.pop(),
            Frontier::Queue(elements) => elements.pop_front(),
        }
    }

    /// True iff no elements are pending.
    pub fn is_empty(&self) -> bool {
        match self {
            Frontier::Stack(elements) => elements.is_empty(),
            Frontier::Queue(elements) => elements.is_empty(),
        }
    }
}
