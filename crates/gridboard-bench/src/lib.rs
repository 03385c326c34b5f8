//! Benchmark profiles for the gridboard crates.
//!
//! - [`reference_board`]: 100x100 board (10K cells) with deterministic pieces
//! - [`stress_board`]: 316x316 board (~100K cells)
//! - [`scatter_positions`]: deterministic piece placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridboard_board::{Board, BoardConfig, EdgeBehavior};

/// A 100x100 absorbing board with state tracking and one piece in every
/// ten cells.
pub fn reference_board(seed: u64) -> Board<u32, u8> {
    populated(100, 100, EdgeBehavior::Absorb, seed)
}

/// A 316x316 wrapping board, for walks that cross the edges.
pub fn stress_board(seed: u64) -> Board<u32, u8> {
    populated(316, 316, EdgeBehavior::Wrap, seed)
}

fn populated(width: u32, height: u32, edge: EdgeBehavior, seed: u64) -> Board<u32, u8> {
    let board: Board<u32, u8> = BoardConfig::new(width, height)
        .track_state(true)
        .edge(edge)
        .build()
        .unwrap_or_else(|e| panic!("benchmark board is valid: {e}"));
    let cells = board.len();
    for (n, index) in scatter_positions(cells, cells / 10, seed).into_iter().enumerate() {
        if let Some(g) = board.grid(index) {
            g.set_piece(n as u32);
        }
    }
    for g in board.iter() {
        g.set_state((g.index() % 4) as u8)
            .unwrap_or_else(|e| panic!("benchmark board tracks state: {e}"));
    }
    board
}

/// Deterministic pseudo-random cell indices in `0..cell_count`.
///
/// Indices may repeat.
pub fn scatter_positions(cell_count: usize, n: usize, seed: u64) -> Vec<usize> {
    (0..n as u64)
        .map(|i| {
            let h = i
                .wrapping_add(seed)
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((h >> 33) % cell_count as u64) as usize
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_deterministic_and_in_range() {
        let a = scatter_positions(100, 50, 7);
        assert_eq!(a, scatter_positions(100, 50, 7));
        assert!(a.iter().all(|&i| i < 100));
    }

    #[test]
    fn reference_board_is_populated() {
        let b = reference_board(1);
        assert_eq!(b.len(), 10_000);
        assert!(b.iter().any(|g| g.has_piece()));
        assert!(b.iter().all(|g| g.state().is_some()));
    }
}
