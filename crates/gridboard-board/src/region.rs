//! Inclusive rectangular coordinate ranges.

use gridboard_core::Vector;

/// An inclusive run of integers walked from `start` towards `end`.
///
/// The walk ascends when `start <= end` and descends otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// First value produced.
    pub start: i32,
    /// Last value produced.
    pub end: i32,
}

impl Span {
    /// Create a span.
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Number of values in the span, saturating at `usize::MAX`.
    pub const fn len(&self) -> usize {
        (self.start.abs_diff(self.end) as usize).saturating_add(1)
    }

    /// Always `false`: a span contains at least its start.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The values in walk order.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        let (start, end) = (self.start, self.end);
        let ascending = start <= end;
        (0..self.len()).map(move |k| {
            // Offsets past i32::MAX wrap back into [start, end].
            let k = k as i32;
            if ascending {
                start.wrapping_add(k)
            } else {
                start.wrapping_sub(k)
            }
        })
    }
}

/// An inclusive rectangle between two corners.
///
/// Coordinates are produced x-major: for each x of the horizontal span,
/// every y of the vertical span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Horizontal span.
    pub xs: Span,
    /// Vertical span.
    pub ys: Span,
}

impl Rect {
    /// The rectangle from `(start_x, start_y)` to `(end_x, end_y)`.
    pub const fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            xs: Span::new(start_x, end_x),
            ys: Span::new(start_y, end_y),
        }
    }

    /// Number of coordinates in the rectangle, saturating at `usize::MAX`.
    pub const fn len(&self) -> usize {
        self.xs.len().saturating_mul(self.ys.len())
    }

    /// Always `false`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Coordinates in x-major walk order.
    pub fn coords(&self) -> impl Iterator<Item = Vector> {
        let ys = self.ys;
        self.xs
            .iter()
            .flat_map(move |x| ys.iter().map(move |y| Vector::new(x, y)))
    }
}
