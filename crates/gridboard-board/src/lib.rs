//! Boards and cell navigation for gridboard.
//!
//! A [`Board`] is a fixed `width × height` grid whose cells each hold an
//! optional piece and, when enabled, an optional state. Cells are reached
//! through [`Grid`] views, which navigate by offset, by compass code or by
//! [`GridDirection`](gridboard_core::GridDirection), and can move pieces.
//!
//! # Edges
//!
//! Lookups past the edge resolve through the board's [`BoundaryRule`]s, in
//! registration order:
//!
//! - no rules: absorbing edges, everything off-board is `None`
//! - [`Clamp`]: snap to the nearest edge cell
//! - [`Wrap`]: torus
//! - [`Stitch`]: continue onto a neighbouring board
//!
//! # Orientation
//!
//! Every coordinate and step accessor has an `_oriented` form, which reads
//! its input through the board's [`Orientation`](gridboard_core::Orientation),
//! and an `_in` form taking an explicit one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod boundary;
pub mod config;
pub mod edge;
pub mod error;
pub mod grid;
pub mod region;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod compliance;

pub use board::Board;
pub use boundary::{BoundaryRule, Clamp, Edge, Stitch, Wrap};
pub use config::BoardConfig;
pub use edge::EdgeBehavior;
pub use error::{BoardError, ConfigError};
pub use grid::Grid;
pub use region::{Rect, Span};
pub use snapshot::{BoardSnapshot, CellSnapshot};
