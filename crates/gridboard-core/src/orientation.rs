//! Board orientation: a 3-bit axis swap and per-axis reversal.
//!
//! Orientation changes how coordinates are *read*, never what a board
//! stores. Bit `0b100` swaps the axes, bit `0b010` reverses the x ordering
//! and bit `0b001` reverses the y ordering. Swapping happens before the
//! reversals.

use std::fmt;

use crate::error::CodecError;
use crate::vector::Vector;

/// One of the eight axis swap/reversal combinations.
///
/// The constant names list the near-to-far order of the vertical axis
/// followed by the horizontal axis as seen through the orientation.
///
/// # Examples
///
/// ```
/// use gridboard_core::Orientation;
///
/// let o = Orientation::RLBF;
/// assert!(o.swaps_axes() && o.reverses_x() && o.reverses_y());
/// assert_eq!(Orientation::from_bits(0b010).unwrap(), Orientation::FBRL);
/// assert!(Orientation::from_bits(8).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Orientation(u8);

impl Orientation {
    /// Identity.
    pub const FBLR: Self = Self(0b000);
    /// Reverse y.
    pub const BFLR: Self = Self(0b001);
    /// Reverse x.
    pub const FBRL: Self = Self(0b010);
    /// Reverse both axes (half turn).
    pub const BFRL: Self = Self(0b011);
    /// Swap axes.
    pub const LRFB: Self = Self(0b100);
    /// Swap axes, then reverse y.
    pub const LRBF: Self = Self(0b101);
    /// Swap axes, then reverse x.
    pub const RLFB: Self = Self(0b110);
    /// Swap axes, then reverse both.
    pub const RLBF: Self = Self(0b111);

    /// All eight orientations in bit order.
    pub const ALL: [Self; 8] = [
        Self::FBLR,
        Self::BFLR,
        Self::FBRL,
        Self::BFRL,
        Self::LRFB,
        Self::LRBF,
        Self::RLFB,
        Self::RLBF,
    ];

    const SWAP: u8 = 0b100;
    const REVERSE_X: u8 = 0b010;
    const REVERSE_Y: u8 = 0b001;

    /// Decode a 3-bit orientation code.
    ///
    /// Returns `Err(CodecError::InvalidOrientation)` for values above 7.
    pub fn from_bits(bits: u8) -> Result<Self, CodecError> {
        if bits > 0b111 {
            return Err(CodecError::InvalidOrientation { bits });
        }
        Ok(Self(bits))
    }

    /// The 3-bit code.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether x and y are exchanged.
    pub const fn swaps_axes(self) -> bool {
        self.0 & Self::SWAP != 0
    }

    /// Whether the x ordering runs from `width - 1` down to `0`.
    pub const fn reverses_x(self) -> bool {
        self.0 & Self::REVERSE_X != 0
    }

    /// Whether the y ordering runs from `height - 1` down to `0`.
    pub const fn reverses_y(self) -> bool {
        self.0 & Self::REVERSE_Y != 0
    }

    /// Returns `true` for [`Orientation::FBLR`].
    pub const fn is_identity(self) -> bool {
        self.0 == 0
    }

    /// The orientation whose relative conversion undoes this one.
    ///
    /// Every orientation is its own inverse except the two quarter turns,
    /// [`LRBF`](Self::LRBF) and [`RLFB`](Self::RLFB), which invert each other.
    pub const fn inverse(self) -> Self {
        match self.0 {
            0b101 => Self::RLFB,
            0b110 => Self::LRBF,
            _ => self,
        }
    }

    /// Re-express a relative step through this orientation.
    ///
    /// Swaps `dx`/`dy` if requested, then negates each reversed axis.
    pub const fn convert_relative(self, v: Vector) -> Vector {
        let mut v = if self.swaps_axes() { v.swapped() } else { v };
        if self.reverses_x() {
            v.x = v.x.wrapping_neg();
        }
        if self.reverses_y() {
            v.y = v.y.wrapping_neg();
        }
        v
    }

    /// Undo [`convert_relative`](Self::convert_relative).
    pub const fn revert_relative(self, v: Vector) -> Vector {
        let mut v = v;
        if self.reverses_x() {
            v.x = v.x.wrapping_neg();
        }
        if self.reverses_y() {
            v.y = v.y.wrapping_neg();
        }
        if self.swaps_axes() {
            v.swapped()
        } else {
            v
        }
    }

    /// The constant's name, e.g. `"RLBF"`.
    pub const fn name(self) -> &'static str {
        match self.0 {
            0b000 => "FBLR",
            0b001 => "BFLR",
            0b010 => "FBRL",
            0b011 => "BFRL",
            0b100 => "LRFB",
            0b101 => "LRBF",
            0b110 => "RLFB",
            _ => "RLBF",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Orientation {
    type Error = CodecError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<Orientation> for u8 {
    fn from(o: Orientation) -> Self {
        o.0
    }
}

/// Converts coordinates for one orientation of a `width × height` board.
///
/// Absolute conversion maps a coordinate read through the orientation to
/// the board's own coordinate; reflection uses the board's extents, so the
/// result is in range whenever the input is in range of the oriented view.
///
/// # Examples
///
/// ```
/// use gridboard_core::{Orientation, OrientationConverter, Vector};
///
/// let conv = OrientationConverter::new(5, 6, Orientation::RLBF);
/// assert_eq!(conv.convert_absolute(0, 0), Vector::new(4, 5));
/// assert_eq!(conv.convert_relative(0, 4), Vector::new(-4, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrientationConverter {
    width: u32,
    height: u32,
    orientation: Orientation,
}

impl OrientationConverter {
    /// Create a converter for a board of the given extents.
    pub const fn new(width: u32, height: u32, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            orientation,
        }
    }

    /// The orientation applied by this converter.
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Board width the reflections are computed against.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Board height the reflections are computed against.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Extents of the board as seen through the orientation.
    ///
    /// Swapping orientations exchange width and height.
    pub const fn view_extents(&self) -> (u32, u32) {
        if self.orientation.swaps_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Map an oriented coordinate to a board coordinate.
    ///
    /// Arithmetic wraps, so extreme inputs map to off-board coordinates
    /// rather than overflowing.
    pub const fn convert_absolute(&self, x: i32, y: i32) -> Vector {
        let (mut x, mut y) = if self.orientation.swaps_axes() {
            (y, x)
        } else {
            (x, y)
        };
        if self.orientation.reverses_x() {
            x = (self.width as i32).wrapping_sub(1).wrapping_sub(x);
        }
        if self.orientation.reverses_y() {
            y = (self.height as i32).wrapping_sub(1).wrapping_sub(y);
        }
        Vector::new(x, y)
    }

    /// Map a board coordinate back to the oriented coordinate.
    ///
    /// `revert_absolute(convert_absolute(x, y)) == (x, y)` for every
    /// orientation and board shape.
    pub const fn revert_absolute(&self, x: i32, y: i32) -> Vector {
        let mut x = x;
        let mut y = y;
        if self.orientation.reverses_x() {
            x = (self.width as i32).wrapping_sub(1).wrapping_sub(x);
        }
        if self.orientation.reverses_y() {
            y = (self.height as i32).wrapping_sub(1).wrapping_sub(y);
        }
        if self.orientation.swaps_axes() {
            Vector::new(y, x)
        } else {
            Vector::new(x, y)
        }
    }

    /// Re-express a relative step through the orientation.
    pub const fn convert_relative(&self, dx: i32, dy: i32) -> Vector {
        self.orientation.convert_relative(Vector::new(dx, dy))
    }

    /// Undo [`convert_relative`](Self::convert_relative).
    pub const fn revert_relative(&self, dx: i32, dy: i32) -> Vector {
        self.orientation.revert_relative(Vector::new(dx, dy))
    }

    /// Whether applying [`convert_absolute`](Self::convert_absolute) twice
    /// is the identity on this board.
    ///
    /// True for the four non-swapping orientations and for a plain swap.
    /// A swap with both reversals is a half-diagonal reflection and only
    /// closes on square boards; a swap with a single reversal is a quarter
    /// turn and never does.
    pub const fn is_involution(&self) -> bool {
        let o = self.orientation;
        if !o.swaps_axes() {
            return true;
        }
        match (o.reverses_x(), o.reverses_y()) {
            (false, false) => true,
            (true, true) => self.width == self.height,
            _ => false,
        }
    }
}
