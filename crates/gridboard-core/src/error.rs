//! Error types for codec construction.

use std::error::Error;
use std::fmt;

/// Errors arising from decoding or constructing codec values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// An orientation code outside the 3-bit range `0..=7`.
    InvalidOrientation {
        /// The rejected bit pattern.
        bits: u8,
    },
    /// A packed direction unit does not fit in its 4-bit field.
    UnitOutOfRange {
        /// Which unit overflowed (`"forward"`, `"back"`, `"left"`, `"right"`).
        name: &'static str,
        /// The requested number of units.
        value: u32,
        /// Largest representable unit count.
        max: u8,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrientation { bits } => {
                write!(f, "invalid orientation code {bits:#05b}: expected 0..=7")
            }
            Self::UnitOutOfRange { name, value, max } => {
                write!(f, "{name} units {value} exceed maximum {max}")
            }
        }
    }
}

impl Error for CodecError {}
