//! Board configuration and validation.
//!
//! [`BoardConfig`] is the builder input for constructing a [`Board`].
//! [`validate()`](BoardConfig::validate) checks the structural invariants
//! up front so that construction itself cannot fail halfway.

use gridboard_core::Orientation;

use crate::board::Board;
use crate::edge::EdgeBehavior;
use crate::error::ConfigError;

/// Construction parameters for a [`Board`].
///
/// # Examples
///
/// ```
/// use gridboard_board::{BoardConfig, EdgeBehavior};
/// use gridboard_core::Orientation;
///
/// let board = BoardConfig::new(8, 8)
///     .orientation(Orientation::BFRL)
///     .track_state(true)
///     .edge(EdgeBehavior::Absorb)
///     .build::<char, u8>()
///     .unwrap();
/// assert_eq!(board.len(), 64);
/// assert!(board.tracks_state());
/// assert_eq!(board.orientation(), Orientation::BFRL);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of columns. Must be in `1..=i32::MAX`.
    pub width: u32,
    /// Number of rows. Must be in `1..=i32::MAX`.
    pub height: u32,
    /// Orientation used by the `*_oriented` accessors. Default: identity.
    pub orientation: Orientation,
    /// Whether cells carry a state slot alongside the piece. Default: false.
    pub track_state: bool,
    /// Built-in edge rule installed at construction. Default: absorb.
    pub edge: EdgeBehavior,
}

impl BoardConfig {
    /// Largest accepted width or height: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Configuration for a `width × height` board with default settings.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::FBLR,
            track_state: false,
            edge: EdgeBehavior::Absorb,
        }
    }

    /// Set the board's initial orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable the per-cell state slot.
    pub fn track_state(mut self, track_state: bool) -> Self {
        self.track_state = track_state;
        self
    }

    /// Select the built-in edge rule.
    pub fn edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Check that the dimensions describe a constructible board.
    ///
    /// Returns the cell count on success.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Self::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(ConfigError::TooManyCells {
                width: self.width,
                height: self.height,
            })
    }

    /// Validate and construct the board.
    pub fn build<P, S>(self) -> Result<Board<P, S>, ConfigError> {
        Board::from_config(self)
    }
}
