//! gridboard: fixed-size 2D boards for tile and board games.
//!
//! This is the facade crate that re-exports the public API of the gridboard
//! sub-crates. For most users, adding `gridboard` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridboard::prelude::*;
//!
//! // An 8x8 board read from black's side of the table.
//! let board: Board<&str> = BoardConfig::new(8, 8)
//!     .orientation(Orientation::BFRL)
//!     .build()
//!     .unwrap();
//!
//! // Oriented (0, 0) is the far corner of the stored board.
//! let corner = board.cell_at_oriented(0, 0).unwrap();
//! assert_eq!((corner.x(), corner.y()), (7, 7));
//!
//! // "Forward" for black is towards increasing y.
//! board.cell_at(3, 1).unwrap().set_piece("pawn");
//! let pawn = board.cell_at(3, 1).unwrap();
//! assert!(pawn.move_piece_by_direction_oriented(GridDirection::FF));
//! assert_eq!(*board.cell_at(3, 3).unwrap().piece(), Some("pawn"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`codec`] | `gridboard-core` | Vectors, direction codes, packed directions, orientations |
//! | [`board`] | `gridboard-board` | Boards, cell views, boundary rules, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate codecs (`gridboard-core`).
///
/// [`codec::Vector`], compass-letter decoding through [`codec::direction()`],
/// [`codec::GridDirection`] and [`codec::Orientation`].
pub use gridboard_core as codec;

/// Boards and navigation (`gridboard-board`).
///
/// [`board::Board`], [`board::Grid`] cell views, the
/// [`board::BoundaryRule`] implementations and [`board::BoardSnapshot`].
pub use gridboard_board as board;

/// Common imports for typical gridboard usage.
///
/// ```rust
/// use gridboard::prelude::*;
/// ```
pub mod prelude {
    // Codecs
    pub use gridboard_core::{
        direction, GridDirection, IntoVector, Orientation, OrientationConverter, Vector,
    };

    // Boards
    pub use gridboard_board::{
        Board, BoardConfig, BoardSnapshot, BoundaryRule, Clamp, Edge, EdgeBehavior, Grid, Stitch,
        Wrap,
    };

    // Errors
    pub use gridboard_board::{BoardError, ConfigError};
    pub use gridboard_core::CodecError;
}
