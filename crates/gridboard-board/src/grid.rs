//! [`Grid`]: a view of one board cell.

use std::cell::{Ref, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};

use gridboard_core::{GridDirection, IntoVector, Orientation, Vector};
use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::board::{Board, Slot};
use crate::error::BoardError;

/// A view of one cell of a [`Board`].
///
/// Views are cheap `Copy` handles borrowed from their board. Navigation
/// never fails loudly: every lookup returns `Option`, and a view that
/// crosses onto a stitched board keeps navigating from that board.
///
/// Two views are equal when they address the same cell of the same board.
pub struct Grid<'a, P, S = ()> {
    board: &'a Board<P, S>,
    index: usize,
}

impl<P, S> Clone for Grid<'_, P, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, S> Copy for Grid<'_, P, S> {}

impl<P, S> PartialEq for Grid<'_, P, S> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.board.instance_id() == other.board.instance_id()
    }
}

impl<P, S> Eq for Grid<'_, P, S> {}

impl<P, S> Hash for Grid<'_, P, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.instance_id().hash(state);
        self.index.hash(state);
    }
}

impl<P, S> fmt::Debug for Grid<'_, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("board", &self.board.instance_id())
            .field("x", &self.x())
            .field("y", &self.y())
            .field("index", &self.index)
            .finish()
    }
}

impl<'a, P, S> Grid<'a, P, S> {
    pub(crate) fn new(board: &'a Board<P, S>, index: usize) -> Self {
        Self { board, index }
    }

    fn slot(&self) -> &'a Slot<P, S> {
        self.board.slot(self.index)
    }

    /// Column of this cell.
    pub fn x(&self) -> i32 {
        (self.index / self.board.height() as usize) as i32
    }

    /// Row of this cell.
    pub fn y(&self) -> i32 {
        (self.index % self.board.height() as usize) as i32
    }

    /// `(x, y)` as a vector.
    pub fn position(&self) -> Vector {
        Vector::new(self.x(), self.y())
    }

    /// Storage index, `x * height + y`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The board this cell belongs to.
    pub fn board(&self) -> &'a Board<P, S> {
        self.board
    }

    // ── Payload ─────────────────────────────────────────────────

    /// Borrow the piece slot.
    ///
    /// # Panics
    ///
    /// If the slot is currently borrowed mutably.
    pub fn piece(&self) -> Ref<'a, Option<P>> {
        self.slot().piece.borrow()
    }

    /// Borrow the piece slot mutably.
    ///
    /// # Panics
    ///
    /// If the slot is currently borrowed.
    pub fn piece_mut(&self) -> RefMut<'a, Option<P>> {
        self.slot().piece.borrow_mut()
    }

    /// Whether a piece occupies this cell.
    pub fn has_piece(&self) -> bool {
        self.slot().piece.borrow().is_some()
    }

    /// Put `piece` on this cell, returning whatever was there.
    pub fn set_piece(&self, piece: impl Into<Option<P>>) -> Option<P> {
        self.slot().piece.replace(piece.into())
    }

    /// Remove and return this cell's piece.
    pub fn take_piece(&self) -> Option<P> {
        self.slot().piece.take()
    }

    /// Borrow the state slot. Always `None` on boards without state.
    pub fn state(&self) -> Ref<'a, Option<S>> {
        self.slot().state.borrow()
    }

    /// Set this cell's state, returning the previous one.
    ///
    /// Returns `Err(BoardError::StateNotTracked)` on boards built without
    /// state.
    pub fn set_state(&self, state: impl Into<Option<S>>) -> Result<Option<S>, BoardError> {
        if !self.board.tracks_state() {
            return Err(BoardError::StateNotTracked);
        }
        Ok(self.slot().state.replace(state.into()))
    }

    /// Remove and return this cell's state.
    pub fn take_state(&self) -> Option<S> {
        self.slot().state.take()
    }

    // ── Navigation ──────────────────────────────────────────────

    /// The cell `(dx, dy)` away, as resolved by the board.
    pub fn neighbor_by_offset(&self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x().checked_add(dx)?;
        let y = self.y().checked_add(dy)?;
        self.board.cell_at(x, y)
    }

    /// The cell one `step` away.
    ///
    /// `step` may be a [`Vector`], an `(dx, dy)` tuple, a
    /// [`GridDirection`] or a compass-letter code such as `"FFR"`.
    pub fn neighbor_by_direction(&self, step: impl IntoVector) -> Option<Self> {
        let v = step.into_vector();
        self.neighbor_by_offset(v.x, v.y)
    }

    /// [`neighbor_by_offset`](Self::neighbor_by_offset) with the offset read
    /// through the board's orientation.
    pub fn neighbor_by_offset_oriented(&self, dx: i32, dy: i32) -> Option<Self> {
        self.neighbor_by_offset_in(self.board.orientation(), dx, dy)
    }

    /// [`neighbor_by_direction`](Self::neighbor_by_direction) with the step
    /// read through the board's orientation.
    pub fn neighbor_by_direction_oriented(&self, step: impl IntoVector) -> Option<Self> {
        self.neighbor_by_direction_in(self.board.orientation(), step)
    }

    /// [`neighbor_by_offset`](Self::neighbor_by_offset) with the offset read
    /// through `orientation`.
    pub fn neighbor_by_offset_in(&self, orientation: Orientation, dx: i32, dy: i32) -> Option<Self> {
        let v = orientation.convert_relative(Vector::new(dx, dy));
        self.neighbor_by_offset(v.x, v.y)
    }

    /// [`neighbor_by_direction`](Self::neighbor_by_direction) with the step
    /// read through `orientation`.
    pub fn neighbor_by_direction_in(
        &self,
        orientation: Orientation,
        step: impl IntoVector,
    ) -> Option<Self> {
        let v = orientation.convert_relative(step.into_vector());
        self.neighbor_by_offset(v.x, v.y)
    }

    /// Existing orthogonal neighbours in F, R, B, L order.
    pub fn neighbors4(&self) -> SmallVec<[Self; 8]> {
        [
            GridDirection::F,
            GridDirection::R,
            GridDirection::B,
            GridDirection::L,
        ]
        .into_iter()
        .filter_map(|d| self.neighbor_by_direction(d))
        .collect()
    }

    /// Existing neighbours in all eight compass directions, clockwise from F.
    pub fn neighbors8(&self) -> SmallVec<[Self; 8]> {
        GridDirection::COMPASS
            .into_iter()
            .filter_map(|d| self.neighbor_by_direction(d))
            .collect()
    }

    /// Step repeatedly by `step`, collecting every cell until the board
    /// resolves nothing.
    ///
    /// The starting cell is not included. A walk stops early, without
    /// repeating a cell, when it comes back to a cell it already visited
    /// (a zero step, or wrapping boundaries).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridboard_board::Board;
    ///
    /// let board: Board<char> = Board::new(5, 5).unwrap();
    /// let corner = board.cell_at(0, 0).unwrap();
    /// let xs: Vec<i32> = corner.walk_until_boundary("R").iter().map(|g| g.x()).collect();
    /// assert_eq!(xs, vec![1, 2, 3, 4]);
    /// ```
    pub fn walk_until_boundary(&self, step: impl IntoVector) -> Vec<Self> {
        self.walk_until(step, |_| false)
    }

    /// Like [`walk_until_boundary`](Self::walk_until_boundary), but also
    /// stops at the first cell for which `stop` returns `true`. That cell
    /// is not included.
    pub fn walk_until<F>(&self, step: impl IntoVector, mut stop: F) -> Vec<Self>
    where
        F: FnMut(&Self) -> bool,
    {
        let v = step.into_vector();
        let mut seen: IndexSet<Self> = IndexSet::new();
        seen.insert(*self);
        let mut current = *self;
        while let Some(next) = current.neighbor_by_offset(v.x, v.y) {
            if stop(&next) || !seen.insert(next) {
                break;
            }
            current = next;
        }
        seen.into_iter().skip(1).collect()
    }

    /// [`walk_until_boundary`](Self::walk_until_boundary) with the step read
    /// through the board's orientation.
    pub fn walk_until_boundary_oriented(&self, step: impl IntoVector) -> Vec<Self> {
        let v = self.board.orientation().convert_relative(step.into_vector());
        self.walk_until_boundary(v)
    }

    /// [`walk_until`](Self::walk_until) with the step read through the
    /// board's orientation.
    pub fn walk_until_oriented<F>(&self, step: impl IntoVector, stop: F) -> Vec<Self>
    where
        F: FnMut(&Self) -> bool,
    {
        let v = self.board.orientation().convert_relative(step.into_vector());
        self.walk_until(v, stop)
    }

    // ── Moving pieces ───────────────────────────────────────────

    /// Move this cell's piece onto `target`.
    ///
    /// Returns `false`, changing nothing, when `target` is `None`.
    /// Otherwise the target's piece is replaced (even if occupied), this
    /// cell is left empty, and `true` is returned. Moving an empty cell
    /// clears the target.
    ///
    /// # Panics
    ///
    /// If either piece slot is currently borrowed.
    pub fn move_piece_to(&self, target: Option<Grid<'_, P, S>>) -> bool {
        let Some(target) = target else {
            return false;
        };
        let piece = self.take_piece();
        target.slot().piece.replace(piece);
        true
    }

    /// Move this cell's piece `(dx, dy)` away.
    pub fn move_piece_by_offset(&self, dx: i32, dy: i32) -> bool {
        self.move_piece_to(self.neighbor_by_offset(dx, dy))
    }

    /// Move this cell's piece one `step` away.
    pub fn move_piece_by_direction(&self, step: impl IntoVector) -> bool {
        self.move_piece_to(self.neighbor_by_direction(step))
    }

    /// Move this cell's piece `(dx, dy)` away as read through the board's
    /// orientation.
    pub fn move_piece_by_offset_oriented(&self, dx: i32, dy: i32) -> bool {
        self.move_piece_to(self.neighbor_by_offset_oriented(dx, dy))
    }

    /// Move this cell's piece one `step` away as read through the board's
    /// orientation.
    pub fn move_piece_by_direction_oriented(&self, step: impl IntoVector) -> bool {
        self.move_piece_to(self.neighbor_by_direction_oriented(step))
    }

    /// Move this cell's piece `(dx, dy)` away as read through `orientation`.
    pub fn move_piece_by_offset_in(&self, orientation: Orientation, dx: i32, dy: i32) -> bool {
        self.move_piece_to(self.neighbor_by_offset_in(orientation, dx, dy))
    }

    /// Move this cell's piece one `step` away as read through `orientation`.
    pub fn move_piece_by_direction_in(&self, orientation: Orientation, step: impl IntoVector) -> bool {
        self.move_piece_to(self.neighbor_by_direction_in(orientation, step))
    }
}
