//! Reusable board fixtures.
//!
//! - [`Piece`] / [`Side`]: chess-style pieces, small and `Copy`.
//! - [`Terrain`]: a per-cell state.
//! - [`chess_board`]: the standard 8×8 opening position.

use gridboard_board::{Board, BoardConfig};

/// Which player owns a piece. White starts on the back rows (high `y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

/// A chess piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn(Side),
    Knight(Side),
    Bishop(Side),
    Rook(Side),
    Queen(Side),
    King(Side),
}

impl Piece {
    pub fn side(self) -> Side {
        match self {
            Piece::Pawn(s)
            | Piece::Knight(s)
            | Piece::Bishop(s)
            | Piece::Rook(s)
            | Piece::Queen(s)
            | Piece::King(s) => s,
        }
    }
}

/// Per-cell state used by state-tracking fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Open,
    Water,
    Wall,
}

/// An 8×8 board with state tracking, set up for a game of chess.
///
/// Black occupies rows 0 and 1, white rows 6 and 7. Every cell's state is
/// [`Terrain::Open`].
pub fn chess_board() -> Board<Piece, Terrain> {
    let board = BoardConfig::new(8, 8)
        .track_state(true)
        .build()
        .unwrap_or_else(|e| panic!("8x8 board is valid: {e}"));
    let back_rank = |side| {
        [
            Piece::Rook(side),
            Piece::Knight(side),
            Piece::Bishop(side),
            Piece::Queen(side),
            Piece::King(side),
            Piece::Bishop(side),
            Piece::Knight(side),
            Piece::Rook(side),
        ]
    };
    for (x, (black, white)) in back_rank(Side::Black)
        .into_iter()
        .zip(back_rank(Side::White))
        .enumerate()
    {
        let x = x as i32;
        place(&board, x, 0, black);
        place(&board, x, 1, Piece::Pawn(Side::Black));
        place(&board, x, 6, Piece::Pawn(Side::White));
        place(&board, x, 7, white);
    }
    for g in board.iter() {
        g.set_state(Terrain::Open)
            .unwrap_or_else(|e| panic!("state tracked: {e}"));
    }
    board
}

/// Put `piece` at `(x, y)`, panicking if the cell does not exist.
pub fn place<P, S>(board: &Board<P, S>, x: i32, y: i32, piece: P) {
    board
        .cell_at(x, y)
        .unwrap_or_else(|| panic!("no cell at ({x}, {y})"))
        .set_piece(piece);
}

/// Every occupied cell as `(x, y, piece)`, in storage order.
pub fn pieces_on<P: Clone, S>(board: &Board<P, S>) -> Vec<(i32, i32, P)> {
    board
        .iter()
        .filter_map(|g| g.piece().clone().map(|p| (g.x(), g.y(), p)))
        .collect()
}
