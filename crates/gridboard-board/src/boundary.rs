//! Boundary rules: how a board resolves coordinates outside its extents.
//!
//! A board with no rules absorbs: anything off the board is `None`. Rules
//! are consulted in registration order and the first `Some` wins, so a
//! [`Stitch`] registered before a [`Wrap`] claims its edge and leaves the
//! others to wrap.

use std::fmt;
use std::rc::Rc;

use crate::board::Board;
use crate::grid::Grid;

/// Resolves an out-of-bounds coordinate to a cell, possibly on another board.
///
/// Only called for coordinates that fall outside `board`. Return `None` to
/// pass the coordinate on to the next rule.
pub trait BoundaryRule<P, S> {
    /// Resolve `(x, y)` relative to `board`.
    fn resolve<'a>(&'a self, x: i32, y: i32, board: &'a Board<P, S>) -> Option<Grid<'a, P, S>>;
}

/// Closure adapter installed by [`Board::add_boundary_fn`].
pub(crate) struct FnRule<F>(pub(crate) F);

impl<P, S, F> BoundaryRule<P, S> for FnRule<F>
where
    F: for<'a> Fn(i32, i32, &'a Board<P, S>) -> Option<Grid<'a, P, S>>,
{
    fn resolve<'a>(&'a self, x: i32, y: i32, board: &'a Board<P, S>) -> Option<Grid<'a, P, S>> {
        (self.0)(x, y, board)
    }
}

/// Wrap both axes: the board becomes a torus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wrap;

impl<P, S> BoundaryRule<P, S> for Wrap {
    fn resolve<'a>(&'a self, x: i32, y: i32, board: &'a Board<P, S>) -> Option<Grid<'a, P, S>> {
        let w = board.width() as i32;
        let h = board.height() as i32;
        board.cell_in_bounds(x.rem_euclid(w), y.rem_euclid(h))
    }
}

/// Snap to the nearest edge cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clamp;

impl<P, S> BoundaryRule<P, S> for Clamp {
    fn resolve<'a>(&'a self, x: i32, y: i32, board: &'a Board<P, S>) -> Option<Grid<'a, P, S>> {
        let w = board.width() as i32;
        let h = board.height() as i32;
        board.cell_in_bounds(x.clamp(0, w - 1), y.clamp(0, h - 1))
    }
}

/// A side of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `x < 0`.
    Left,
    /// `x >= width`.
    Right,
    /// `y < 0`.
    Front,
    /// `y >= height`.
    Back,
}

/// Continue past one edge onto a neighbouring board.
///
/// Crossing the [`Right`](Edge::Right) edge lands on the neighbour's left
/// column, crossing [`Front`](Edge::Front) lands on its back row, and so
/// on. `offset` shifts the neighbour along the shared edge: with an offset
/// of 2 on the right edge, row 2 of this board meets row 0 of the
/// neighbour.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use gridboard_board::{Board, Edge, Stitch};
///
/// let east: Rc<Board<&str>> = Rc::new(Board::new(3, 3).unwrap());
/// let mut west: Board<&str> = Board::new(3, 3).unwrap();
/// west.add_boundary(Stitch::new(Edge::Right, Rc::clone(&east)));
///
/// let piece = west.cell_at(2, 1).unwrap();
/// piece.set_piece("rook");
/// assert!(piece.move_piece_by_direction("R"));
/// assert_eq!(*east.cell_at(0, 1).unwrap().piece(), Some("rook"));
/// ```
pub struct Stitch<P, S = ()> {
    edge: Edge,
    neighbor: Rc<Board<P, S>>,
    offset: i32,
}

impl<P, S> Stitch<P, S> {
    /// Stitch `neighbor` flush against `edge`.
    pub fn new(edge: Edge, neighbor: Rc<Board<P, S>>) -> Self {
        Self::with_offset(edge, neighbor, 0)
    }

    /// Stitch `neighbor` against `edge`, shifted by `offset` cells along it.
    pub fn with_offset(edge: Edge, neighbor: Rc<Board<P, S>>, offset: i32) -> Self {
        Self {
            edge,
            neighbor,
            offset,
        }
    }

    /// The edge this rule claims.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The board on the other side.
    pub fn neighbor(&self) -> &Rc<Board<P, S>> {
        &self.neighbor
    }

    /// Shift along the shared edge.
    pub fn offset(&self) -> i32 {
        self.offset
    }
}

impl<P, S> fmt::Debug for Stitch<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stitch")
            .field("edge", &self.edge)
            .field("neighbor", &self.neighbor.instance_id())
            .field("offset", &self.offset)
            .finish()
    }
}

impl<P, S> BoundaryRule<P, S> for Stitch<P, S> {
    fn resolve<'a>(&'a self, x: i32, y: i32, board: &'a Board<P, S>) -> Option<Grid<'a, P, S>> {
        let w = board.width() as i32;
        let h = board.height() as i32;
        let nw = self.neighbor.width() as i32;
        let nh = self.neighbor.height() as i32;
        let (nx, ny) = match self.edge {
            Edge::Right if x >= w => (x - w, y.checked_sub(self.offset)?),
            Edge::Left if x < 0 => (nw + x, y.checked_sub(self.offset)?),
            Edge::Front if y < 0 => (x.checked_sub(self.offset)?, nh + y),
            Edge::Back if y >= h => (x.checked_sub(self.offset)?, y - h),
            _ => return None,
        };
        self.neighbor.cell_at(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::edge::EdgeBehavior;
    use proptest::prelude::*;

    fn xy<P, S>(g: &Grid<'_, P, S>) -> (i32, i32) {
        (g.x(), g.y())
    }

    #[test]
    fn clamp_snaps_to_edges() {
        let b: Board<u8> = BoardConfig::new(3, 2).edge(EdgeBehavior::Clamp).build().unwrap();
        assert_eq!(xy(&b.cell_at(-5, 1).unwrap()), (0, 1));
        assert_eq!(xy(&b.cell_at(7, -3).unwrap()), (2, 0));
        assert_eq!(xy(&b.cell_at(1, 9).unwrap()), (1, 1));
    }

    #[test]
    fn wrap_handles_extreme_coordinates() {
        let b: Board<u8> = BoardConfig::new(3, 5).edge(EdgeBehavior::Wrap).build().unwrap();
        let g = b.cell_at(i32::MIN, i32::MAX).unwrap();
        assert_eq!(
            xy(&g),
            (i32::MIN.rem_euclid(3), i32::MAX.rem_euclid(5))
        );
    }

    #[test]
    fn stitch_each_edge() {
        let east: Rc<Board<u8>> = Rc::new(Board::new(3, 2).unwrap());
        let west: Rc<Board<u8>> = Rc::new(Board::new(4, 2).unwrap());
        let north: Rc<Board<u8>> = Rc::new(Board::new(2, 3).unwrap());
        let south: Rc<Board<u8>> = Rc::new(Board::new(2, 5).unwrap());
        let mut hub: Board<u8> = Board::new(2, 2).unwrap();
        hub.add_boundary(Stitch::new(Edge::Right, Rc::clone(&east)));
        hub.add_boundary(Stitch::new(Edge::Left, Rc::clone(&west)));
        hub.add_boundary(Stitch::new(Edge::Front, Rc::clone(&north)));
        hub.add_boundary(Stitch::new(Edge::Back, Rc::clone(&south)));

        let g = hub.cell_at(2, 1).unwrap();
        assert_eq!(g.board().instance_id(), east.instance_id());
        assert_eq!(xy(&g), (0, 1));

        let g = hub.cell_at(-1, 0).unwrap();
        assert_eq!(g.board().instance_id(), west.instance_id());
        assert_eq!(xy(&g), (3, 0));

        let g = hub.cell_at(1, -1).unwrap();
        assert_eq!(g.board().instance_id(), north.instance_id());
        assert_eq!(xy(&g), (1, 2));

        let g = hub.cell_at(0, 3).unwrap();
        assert_eq!(g.board().instance_id(), south.instance_id());
        assert_eq!(xy(&g), (0, 1));
    }

    #[test]
    fn stitch_offset_shifts_along_edge() {
        let neighbor: Rc<Board<u8>> = Rc::new(Board::new(2, 4).unwrap());
        let mut b: Board<u8> = Board::new(2, 4).unwrap();
        b.add_boundary(Stitch::with_offset(Edge::Right, Rc::clone(&neighbor), 2));
        assert_eq!(xy(&b.cell_at(2, 2).unwrap()), (0, 0));
        assert_eq!(xy(&b.cell_at(2, 3).unwrap()), (0, 1));
        assert!(b.cell_at(2, 1).is_none());
    }

    #[test]
    fn navigation_continues_on_the_neighbor() {
        let far: Rc<Board<char>> = Rc::new(Board::new(2, 1).unwrap());
        let mut near: Board<char> = Board::new(2, 1).unwrap();
        near.add_boundary(Stitch::new(Edge::Right, Rc::clone(&far)));

        let walk = near.cell_at(0, 0).unwrap().walk_until_boundary("R");
        let ids: Vec<_> = walk.iter().map(|g| (g.board().instance_id(), g.x())).collect();
        assert_eq!(
            ids,
            vec![
                (near.instance_id(), 1),
                (far.instance_id(), 0),
                (far.instance_id(), 1),
            ]
        );
    }

    #[test]
    fn earlier_rules_win() {
        let neighbor: Rc<Board<u8>> = Rc::new(Board::new(1, 1).unwrap());
        let mut b: Board<u8> = Board::new(3, 3).unwrap();
        b.add_boundary(Stitch::new(Edge::Left, Rc::clone(&neighbor)));
        b.add_boundary(Wrap);
        assert_eq!(b.cell_at(-1, 0).unwrap().board().instance_id(), neighbor.instance_id());
        assert_eq!(b.cell_at(3, 0).unwrap().board().instance_id(), b.instance_id());
    }

    #[test]
    fn stitch_debug_names_the_neighbor() {
        let neighbor: Rc<Board<u8>> = Rc::new(Board::new(1, 1).unwrap());
        let s = Stitch::new(Edge::Back, Rc::clone(&neighbor));
        let dbg = format!("{s:?}");
        assert!(dbg.contains("Back"));
        assert!(dbg.contains(&neighbor.instance_id().to_string()));
        assert_eq!((s.edge(), s.offset()), (Edge::Back, 0));
        assert!(Rc::ptr_eq(s.neighbor(), &neighbor));
    }

    proptest! {
        #[test]
        fn wrap_matches_euclidean_modulo(
            w in 1u32..8, h in 1u32..8,
            x in -50i32..50, y in -50i32..50,
        ) {
            let b: Board<u8> = BoardConfig::new(w, h).edge(EdgeBehavior::Wrap).build().unwrap();
            let g = b.cell_at(x, y).unwrap();
            prop_assert_eq!(xy(&g), (x.rem_euclid(w as i32), y.rem_euclid(h as i32)));
        }

        #[test]
        fn clamp_always_resolves_on_board(
            w in 1u32..8, h in 1u32..8,
            x in -50i32..50, y in -50i32..50,
        ) {
            let b: Board<u8> = BoardConfig::new(w, h).edge(EdgeBehavior::Clamp).build().unwrap();
            let g = b.cell_at(x, y).unwrap();
            prop_assert!(g.x() >= 0 && g.x() < w as i32);
            prop_assert!(g.y() >= 0 && g.y() < h as i32);
        }
    }
}
