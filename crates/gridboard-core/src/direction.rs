//! Compass-letter direction codes.
//!
//! A code is a string over `F`, `B`, `L`, `R`. Every letter contributes one
//! unit step and repeated or mixed letters accumulate, so `"FFR"` is two
//! rows forward and one column right. Any other character is ignored.
//!
//! Decoding is pure, so results are memoized: [`DirectionCache`] owns an
//! explicit code → vector map, and [`direction()`] consults a process-wide
//! shared cache.

use std::sync::{Mutex, OnceLock, PoisonError};

use indexmap::IndexMap;

use crate::vector::{IntoVector, Vector};

/// Decode a compass-letter code without consulting any cache.
///
/// # Examples
///
/// ```
/// use gridboard_core::{decode, Vector};
///
/// assert_eq!(decode("FFR"), Vector::new(1, -2));
/// assert_eq!(decode("FR"), decode("RF"));
/// assert_eq!(decode("F?B"), Vector::ZERO);
/// ```
pub fn decode(codes: &str) -> Vector {
    let mut v = Vector::ZERO;
    for code in codes.chars() {
        match code {
            'F' => v.y -= 1,
            'B' => v.y += 1,
            'L' => v.x -= 1,
            'R' => v.x += 1,
            _ => {}
        }
    }
    v
}

/// Memoizing decoder for compass-letter codes.
///
/// Entries are kept in first-seen order and are never evicted; a cache
/// grows by one entry per distinct code string it has resolved.
#[derive(Clone, Debug, Default)]
pub struct DirectionCache {
    entries: IndexMap<String, Vector>,
}

impl DirectionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `codes`, reusing a previously decoded vector when present.
    pub fn resolve(&mut self, codes: &str) -> Vector {
        if let Some(v) = self.entries.get(codes) {
            return *v;
        }
        let v = decode(codes);
        self.entries.insert(codes.to_owned(), v);
        v
    }

    /// The cached vector for `codes`, if it has been resolved before.
    pub fn get(&self, codes: &str) -> Option<Vector> {
        self.entries.get(codes).copied()
    }

    /// Number of distinct codes resolved so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved codes in first-seen order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Process-wide cache behind [`direction()`].
static SHARED_CACHE: OnceLock<Mutex<DirectionCache>> = OnceLock::new();

/// Decode a compass-letter code through the shared cache.
///
/// Accepts a plain string or a code list whose first element is the code
/// (`["FR"]`); an empty list decodes to the zero step.
///
/// # Examples
///
/// ```
/// use gridboard_core::{direction, Vector};
///
/// assert_eq!(direction("FR"), Vector::new(1, -1));
/// assert_eq!(direction(&["FR"]), Vector::new(1, -1));
/// assert_eq!(direction(&String::from("BBL")), Vector::new(-1, 2));
/// ```
pub fn direction<C: DirectionCodes + ?Sized>(codes: &C) -> Vector {
    let cache = SHARED_CACHE.get_or_init(|| Mutex::new(DirectionCache::new()));
    let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
    cache.resolve(codes.code())
}

/// Something that carries a compass-letter code.
pub trait DirectionCodes {
    /// The code string to decode.
    fn code(&self) -> &str;
}

impl DirectionCodes for str {
    fn code(&self) -> &str {
        self
    }
}

impl DirectionCodes for String {
    fn code(&self) -> &str {
        self
    }
}

impl<T: AsRef<str>> DirectionCodes for [T] {
    fn code(&self) -> &str {
        self.first().map_or("", AsRef::as_ref)
    }
}

impl<T: AsRef<str>, const N: usize> DirectionCodes for [T; N] {
    fn code(&self) -> &str {
        self.as_slice().code()
    }
}

impl IntoVector for &str {
    fn into_vector(self) -> Vector {
        direction(self)
    }
}

impl IntoVector for &String {
    fn into_vector(self) -> Vector {
        direction(self)
    }
}

impl IntoVector for String {
    fn into_vector(self) -> Vector {
        direction(&self)
    }
}

impl<T: AsRef<str>, const N: usize> IntoVector for [T; N] {
    fn into_vector(self) -> Vector {
        direction(&self)
    }
}
