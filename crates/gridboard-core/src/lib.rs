//! Coordinate codecs for gridboard.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types that every board operation is expressed in:
//!
//! - [`Vector`]: an absolute coordinate or a relative step.
//! - [`direction()`] and [`DirectionCache`]: compass-letter codes
//!   (`"F"`, `"B"`, `"L"`, `"R"`, repeatable) decoded to vectors.
//! - [`GridDirection`]: the packed four-nibble direction encoding.
//! - [`Orientation`] and [`OrientationConverter`]: the 3-bit axis
//!   swap/reversal transform applied to absolute and relative coordinates.
//!
//! # Conventions
//!
//! `F` is towards decreasing `y`, `B` towards increasing `y`, `L` towards
//! decreasing `x` and `R` towards increasing `x`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod grid_direction;
pub mod id;
pub mod orientation;
pub mod vector;

pub use direction::{decode, direction, DirectionCache, DirectionCodes};
pub use error::CodecError;
pub use grid_direction::GridDirection;
pub use id::BoardInstanceId;
pub use orientation::{Orientation, OrientationConverter};
pub use vector::{IntoVector, Vector};
