//! Board identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BOARD: AtomicU64 = AtomicU64::new(1);

/// Identity of one board, used to tell cells of equal-sized boards apart.
///
/// Cell views compare and hash by `(board id, index)`, so a view of a
/// stitched neighbour never equals a view of the board it was reached from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardInstanceId(u64);

impl BoardInstanceId {
    /// A fresh id, distinct from every id handed out before in this process.
    pub fn next() -> Self {
        Self(NEXT_BOARD.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BoardInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_ids_differ() {
        let a = BoardInstanceId::next();
        let b = BoardInstanceId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
