//! Deep copies of board contents and in-place restoration.

use crate::board::Board;
use crate::error::BoardError;

/// A detached copy of every cell's piece and state.
///
/// Cells are stored in board order (`x * height + y`). With the `serde`
/// feature enabled a snapshot serializes as
/// `{"width":…, "height":…, "cells":[{"piece":…, "state":…}, …]}`, with
/// `state` omitted where a cell has none.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot<P, S = ()> {
    /// Width of the board the snapshot was taken from.
    pub width: u32,
    /// Height of the board the snapshot was taken from.
    pub height: u32,
    /// One entry per cell, in board order.
    pub cells: Vec<CellSnapshot<P, S>>,
}

/// The contents of one cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSnapshot<P, S = ()> {
    /// The piece, if any.
    pub piece: Option<P>,
    /// The state, if any.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub state: Option<S>,
}

impl<P, S> BoardSnapshot<P, S> {
    /// The `(width, height, cells)` shape used to match against a board.
    fn shape(&self) -> (u32, u32, usize) {
        (self.width, self.height, self.cells.len())
    }
}

impl<P: Clone, S: Clone> Board<P, S> {
    /// Copy every piece and state out of the board.
    ///
    /// Boundary rules and orientation are not part of a snapshot.
    pub fn snapshot(&self) -> BoardSnapshot<P, S> {
        let cells = self
            .iter()
            .map(|g| CellSnapshot {
                piece: g.piece().clone(),
                state: g.state().clone(),
            })
            .collect();
        BoardSnapshot {
            width: self.width(),
            height: self.height(),
            cells,
        }
    }

    /// Overwrite the board's contents with `snapshot`.
    ///
    /// Each cell's piece is replaced by the snapshot's, reusing existing
    /// allocations through [`Clone::clone_from`]. States are restored the
    /// same way when the board tracks state and ignored otherwise.
    ///
    /// Returns `Err(BoardError::SnapshotMismatch)` without touching any
    /// cell when the snapshot was taken from a board of a different shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridboard_board::Board;
    ///
    /// let board: Board<String> = Board::new(2, 2).unwrap();
    /// board.cell_at(0, 0).unwrap().set_piece("king".to_string());
    /// let saved = board.snapshot();
    ///
    /// board.cell_at(0, 0).unwrap().move_piece_by_offset(1, 1);
    /// board.restore(&saved).unwrap();
    /// assert_eq!(board.cell_at(0, 0).unwrap().piece().as_deref(), Some("king"));
    /// assert!(!board.cell_at(1, 1).unwrap().has_piece());
    /// ```
    pub fn restore(&self, snapshot: &BoardSnapshot<P, S>) -> Result<(), BoardError> {
        let expected = (self.width(), self.height(), self.len());
        let found = snapshot.shape();
        if expected != found {
            return Err(BoardError::SnapshotMismatch { expected, found });
        }
        let tracks_state = self.tracks_state();
        for (index, cell) in snapshot.cells.iter().enumerate() {
            let slot = self.slot(index);
            slot.piece.borrow_mut().clone_from(&cell.piece);
            if tracks_state {
                slot.state.borrow_mut().clone_from(&cell.state);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_detached() {
        let b: Board<String, u8> = Board::with_state(2, 1).unwrap();
        b.cell_at(0, 0).unwrap().set_piece("a".to_string());
        b.cell_at(1, 0).unwrap().set_state(7).unwrap();
        let snap = b.snapshot();

        b.clear();
        assert_eq!(snap.cells[0].piece.as_deref(), Some("a"));
        assert_eq!(snap.cells[1].state, Some(7));
        assert_eq!((snap.width, snap.height), (2, 1));
    }

    #[test]
    fn restore_round_trips() {
        let b: Board<String, u8> = Board::with_state(3, 2).unwrap();
        b.cell_at(2, 1).unwrap().set_piece("q".to_string());
        b.cell_at(0, 1).unwrap().set_state(1).unwrap();
        let snap = b.snapshot();

        b.cell_at(2, 1).unwrap().move_piece_by_offset(-2, -1);
        b.cell_at(0, 1).unwrap().take_state();
        b.cell_at(1, 1).unwrap().set_state(5).unwrap();

        b.restore(&snap).unwrap();
        assert_eq!(b.snapshot(), snap);
    }

    #[test]
    fn mismatched_shape_changes_nothing() {
        let b: Board<u8> = Board::new(2, 3).unwrap();
        b.cell_at(1, 1).unwrap().set_piece(4);
        let other: Board<u8> = Board::new(3, 2).unwrap();
        let err = b.restore(&other.snapshot()).unwrap_err();
        assert_eq!(
            err,
            BoardError::SnapshotMismatch {
                expected: (2, 3, 6),
                found: (3, 2, 6),
            }
        );
        assert_eq!(*b.cell_at(1, 1).unwrap().piece(), Some(4));

        let mut truncated = b.snapshot();
        truncated.cells.pop();
        assert!(matches!(
            b.restore(&truncated),
            Err(BoardError::SnapshotMismatch { found: (2, 3, 5), .. })
        ));
    }

    #[test]
    fn untracked_board_ignores_snapshot_state() {
        let b: Board<u8, u8> = Board::new(1, 1).unwrap();
        let snap = BoardSnapshot {
            width: 1,
            height: 1,
            cells: vec![CellSnapshot {
                piece: Some(2),
                state: Some(9),
            }],
        };
        b.restore(&snap).unwrap();
        let g = b.cell_at(0, 0).unwrap();
        assert_eq!(*g.piece(), Some(2));
        assert_eq!(*g.state(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape() {
        let b: Board<char, u8> = Board::with_state(1, 2).unwrap();
        b.cell_at(0, 0).unwrap().set_piece('k');
        b.cell_at(0, 1).unwrap().set_state(3).unwrap();
        let json = serde_json::to_value(b.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "width": 1,
                "height": 2,
                "cells": [
                    { "piece": "k" },
                    { "piece": null, "state": 3 },
                ],
            })
        );
        let back: BoardSnapshot<char, u8> = serde_json::from_value(json).unwrap();
        b.clear();
        b.restore(&back).unwrap();
        assert!(b.cell_at(0, 0).unwrap().has_piece());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_without_default_state() {
        #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        enum Ground {
            Grass,
            Mud,
        }

        let b: Board<u8, Ground> = Board::with_state(2, 1).unwrap();
        b.cell_at(0, 0).unwrap().set_state(Ground::Mud).unwrap();
        b.cell_at(1, 0).unwrap().set_piece(5);
        let snap = b.snapshot();

        let text = serde_json::to_string(&snap).unwrap();
        let back: BoardSnapshot<u8, Ground> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snap);
        assert_eq!(back.cells[1].state, None);

        b.cell_at(1, 0).unwrap().set_state(Ground::Grass).unwrap();
        b.restore(&back).unwrap();
        assert_eq!(*b.cell_at(0, 0).unwrap().state(), Some(Ground::Mud));
        assert_eq!(*b.cell_at(1, 0).unwrap().state(), None);
    }
}
