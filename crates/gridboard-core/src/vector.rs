//! The [`Vector`] value type and the [`IntoVector`] conversion trait.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D integer vector.
///
/// Used both for absolute coordinates (`x` column, `y` row) and for
/// relative steps between cells. Vectors are plain `Copy` values, so a
/// decoded or cached vector can never be mutated through a shared handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Horizontal component. Positive is towards `R`.
    pub x: i32,
    /// Vertical component. Positive is towards `B`.
    pub y: i32,
}

impl Vector {
    /// The zero step.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Construct a vector from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` for the zero step.
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// The vector with its components exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for (i32, i32) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vector {
    type Output = Self;

    fn mul(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

/// Anything that describes a relative step between cells.
///
/// Implemented for [`Vector`], `(i32, i32)` offsets, packed
/// [`GridDirection`](crate::GridDirection) values and compass-letter codes
/// (`&str`, `String`, `[&str; 1]`), so navigation methods accept any of
/// them interchangeably.
pub trait IntoVector {
    /// Decode into a relative step.
    fn into_vector(self) -> Vector;
}

impl IntoVector for Vector {
    fn into_vector(self) -> Vector {
        self
    }
}

impl IntoVector for (i32, i32) {
    fn into_vector(self) -> Vector {
        self.into()
    }
}
