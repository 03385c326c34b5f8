//! Board invariant checks shared by the test modules.
//!
//! Each helper panics with a descriptive message on the first violation.

use std::fmt::Debug;

use gridboard_core::Orientation;
use indexmap::IndexSet;

use crate::board::Board;

/// Assert that every cell reports the coordinate it was looked up by.
pub fn assert_coordinates_round_trip<P, S>(board: &Board<P, S>) {
    for x in 0..board.width() as i32 {
        for y in 0..board.height() as i32 {
            let g = board
                .cell_in_bounds(x, y)
                .unwrap_or_else(|| panic!("({x}, {y}) missing from {board:?}"));
            assert_eq!((g.x(), g.y()), (x, y), "cell at ({x}, {y}) misreports");
            assert_eq!(board.index_of(x, y), Some(g.index()));
            assert_eq!(board.position_of(g.index()).map(|v| (v.x, v.y)), Some((x, y)));
        }
    }
}

/// Assert that storage indices are unique and cover `0..len`.
pub fn assert_indices_complete<P, S>(board: &Board<P, S>) {
    let indices: IndexSet<usize> = board.iter().map(|g| g.index()).collect();
    assert_eq!(indices.len(), board.len(), "duplicate indices");
    assert!(
        indices.iter().enumerate().all(|(i, &index)| i == index),
        "iteration is not in storage order"
    );
}

/// Assert that `b in neighbors4(a)` implies `a in neighbors4(b)`.
///
/// Holds for absorbing and wrapping edges.
pub fn assert_neighbors_symmetric<P, S>(board: &Board<P, S>) {
    for a in board.iter() {
        for b in a.neighbors4() {
            assert!(
                b.neighbors4().contains(&a),
                "{b:?} in N({a:?}) but not the reverse"
            );
        }
    }
}

/// Assert that every orientation's rows, and separately its columns, cover
/// each cell exactly once.
pub fn assert_oriented_views_cover_board<P, S>(board: &Board<P, S>) {
    for o in Orientation::ALL {
        let (vw, vh) = board.converter(o).view_extents();
        let rows: IndexSet<usize> = (0..vh as i32)
            .flat_map(|y| board.row_in(o, y))
            .map(|g| g.index())
            .collect();
        assert_eq!(rows.len(), board.len(), "rows under {o} miss cells");
        let columns: IndexSet<usize> = (0..vw as i32)
            .flat_map(|x| board.column_in(o, x))
            .map(|g| g.index())
            .collect();
        assert_eq!(columns.len(), board.len(), "columns under {o} miss cells");
    }
}

/// Assert that restoring a fresh snapshot is a no-op.
pub fn assert_snapshot_round_trip<P, S>(board: &Board<P, S>)
where
    P: Clone + PartialEq + Debug,
    S: Clone + PartialEq + Debug,
{
    let before = board.snapshot();
    board
        .restore(&before)
        .unwrap_or_else(|e| panic!("restoring own snapshot failed: {e}"));
    assert_eq!(board.snapshot(), before);
}

/// Run every applicable check.
pub fn run_full_compliance<P, S>(board: &Board<P, S>)
where
    P: Clone + PartialEq + Debug,
    S: Clone + PartialEq + Debug,
{
    assert_coordinates_round_trip(board);
    assert_indices_complete(board);
    assert_neighbors_symmetric(board);
    assert_oriented_views_cover_board(board);
    assert_snapshot_round_trip(board);
}
