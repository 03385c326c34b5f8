//! Test fixtures and mock types for gridboard development.
//!
//! Provides small piece and state enums, board builders for common
//! layouts, and [`RecordingRule`], a [`BoundaryRule`] that logs every
//! coordinate it is asked to resolve.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use gridboard_board::{Board, BoundaryRule, Grid};

pub use fixtures::{chess_board, place, pieces_on, Piece, Side, Terrain};

/// Mock [`BoundaryRule`] that records each query and resolves nothing.
///
/// The log is shared through an `Rc`, so keep a [`handle`](Self::handle)
/// before moving the rule into a board.
#[derive(Clone, Default)]
pub struct RecordingRule {
    calls: Rc<RefCell<Vec<(i32, i32)>>>,
}

impl RecordingRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second handle onto the same call log.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    /// Coordinates queried so far, oldest first.
    pub fn calls(&self) -> Vec<(i32, i32)> {
        self.calls.borrow().clone()
    }
}

impl<P, S> BoundaryRule<P, S> for RecordingRule {
    fn resolve<'a>(&'a self, x: i32, y: i32, _board: &'a Board<P, S>) -> Option<Grid<'a, P, S>> {
        self.calls.borrow_mut().push((x, y));
        None
    }
}

/// Boundary rule that resolves every out-of-bounds query to one fixed cell.
///
/// Useful for checking that navigation honours custom rules.
#[derive(Clone, Copy, Debug)]
pub struct PinRule {
    pub x: i32,
    pub y: i32,
}

impl<P, S> BoundaryRule<P, S> for PinRule {
    fn resolve<'a>(&'a self, _x: i32, _y: i32, board: &'a Board<P, S>) -> Option<Grid<'a, P, S>> {
        board.cell_in_bounds(self.x, self.y)
    }
}
