use std::fmt;

use crate::Scalar;

/// Median reported by [`crate::Tracker::median`]
///
/// An odd count has a single middle value, which is returned as-is so that no precision is lost
/// (an `i64` above 2^53 can't round-trip through `f64`).
/// Only an even count needs averaging, and that average is computed in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Median<T> {
    /// The middle value of an odd count
    Exact(T),
    /// The average of the two middle values of an even count
    Mean(f64),
}

impl<T: Scalar> Median<T> {
    /// The median as a real number
    ///
    /// Lossy for [`Self::Exact`] values that `f64` can't represent.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Exact(v) => v.to_real(),
            Self::Mean(m) => *m,
        }
    }

    /// The middle value, if the count was odd
    pub fn exact(&self) -> Option<&T> {
        match self {
            Self::Exact(v) => Some(v),
            Self::Mean(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Median<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => v.fmt(f),
            Self::Mean(m) => m.fmt(f),
        }
    }
}
