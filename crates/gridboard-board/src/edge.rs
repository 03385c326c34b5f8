//! Built-in edge behaviors selectable from a [`BoardConfig`](crate::BoardConfig).

use crate::boundary::{Clamp, Wrap};
use crate::board::Board;

/// How a board resolves coordinates past its edges when no custom
/// [`BoundaryRule`](crate::BoundaryRule) claims them first.
///
/// # Examples
///
/// ```
/// use gridboard_board::{BoardConfig, EdgeBehavior};
///
/// let torus = BoardConfig::new(4, 4)
///     .edge(EdgeBehavior::Wrap)
///     .build::<char, ()>()
///     .unwrap();
/// let corner = torus.cell_at(-1, -1).unwrap();
/// assert_eq!((corner.x(), corner.y()), (3, 3));
///
/// let plain = BoardConfig::new(4, 4).build::<char, ()>().unwrap();
/// assert!(plain.cell_at(-1, -1).is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds coordinates resolve to nothing.
    #[default]
    Absorb,
    /// Out-of-bounds coordinates snap to the nearest edge cell.
    Clamp,
    /// Out-of-bounds coordinates wrap to the opposite side (torus).
    Wrap,
}

impl EdgeBehavior {
    /// Install the rule for this behavior on `board`.
    pub(crate) fn install<P, S>(self, board: &mut Board<P, S>) {
        match self {
            Self::Absorb => {}
            Self::Clamp => board.add_boundary(Clamp),
            Self::Wrap => board.add_boundary(Wrap),
        }
    }
}
