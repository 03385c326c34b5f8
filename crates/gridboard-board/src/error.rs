//! Error types for board construction and board operations.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a [`BoardConfig`](crate::BoardConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Attempted to construct a board with zero cells.
    EmptyBoard,
    /// A dimension does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `width * height` cells cannot be addressed on this platform.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { width, height } => {
                write!(f, "{width}x{height} board has too many cells to index")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from operations on a constructed board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A snapshot does not describe a board of this shape. Nothing was
    /// restored.
    SnapshotMismatch {
        /// `(width, height, cells)` of the board.
        expected: (u32, u32, usize),
        /// `(width, height, cells)` of the snapshot.
        found: (u32, u32, usize),
    },
    /// The board was built without per-cell state.
    StateNotTracked,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SnapshotMismatch { expected, found } => write!(
                f,
                "snapshot is {}x{} with {} cells, board is {}x{} with {} cells",
                found.0, found.1, found.2, expected.0, expected.1, expected.2
            ),
            Self::StateNotTracked => write!(f, "board does not track cell state"),
        }
    }
}

impl Error for BoardError {}
