use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{Median, MedianError, Result, Scalar};

/// Exact running median over a stream of values
///
/// The [`Self::new`] constructor creates an empty tracker.
/// Values are then added one at a time with [`Self::insert`],
/// and the median of everything seen so far can be read at any point with [`Self::median`].
///
/// Internally the values are split into two heaps:
/// a max-heap holding the lower half and a min-heap holding the upper half.
/// The lower half is allowed to hold exactly one extra value, so for odd counts
/// the median is simply the top of the lower half, and for even counts it is the
/// average of the two heap tops.
/// Each insert is `O(log n)`, and reading the median is `O(1)`.
///
/// Every inserted value is also kept, in order, in [`Self::history`].
#[derive(Debug, Clone)]
pub struct Tracker<T: Scalar = i64> {
    /// Max-heap holding the lower half of the values
    lower: BinaryHeap<T>,
    /// Min-heap holding the upper half of the values
    upper: BinaryHeap<Reverse<T>>,

    /// Every value inserted since construction or the last [`Self::reset`], in arrival order
    history: Vec<T>,
}

impl<T: Scalar> Default for Tracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Tracker<T> {
    /// Constructs an empty [`Self`]
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
            history: Vec::new(),
        }
    }

    /// Constructs an empty [`Self`], with room for `capacity` values before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        let half = capacity / 2 + 1;

        Self {
            lower: BinaryHeap::with_capacity(half),
            upper: BinaryHeap::with_capacity(half),
            history: Vec::with_capacity(capacity),
        }
    }

    /// Number of values inserted since construction or the last [`Self::reset`]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no values have been inserted since construction or the last [`Self::reset`]
    ///
    /// [`Self::median`] returns [`MedianError::EmptyState`] exactly when this is true.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Number of values currently in the lower half
    pub fn lower_len(&self) -> usize {
        self.lower.len()
    }

    /// Number of values currently in the upper half
    pub fn upper_len(&self) -> usize {
        self.upper.len()
    }

    /// Largest value of the lower half, if any
    pub fn lower_max(&self) -> Option<&T> {
        self.lower.peek()
    }

    /// Smallest value of the upper half, if any
    pub fn upper_min(&self) -> Option<&T> {
        self.upper.peek().map(|Reverse(v)| v)
    }

    /// All inserted values in the order they arrived
    pub fn history(&self) -> &[T] {
        &self.history
    }

    /// Adds a new value to the stream, updating the running median
    pub fn insert(&mut self, value: T) {
        self.history.push(value.clone());

        // Route against the current lower max, so the new value can't break the ordering between halves
        let to_lower = match self.lower.peek() {
            Some(max) => value <= *max,
            None => true,
        };

        #[cfg(feature = "logging")]
        log::trace!(
            "Inserting value #{} into the {} half",
            self.history.len(),
            if to_lower { "lower" } else { "upper" }
        );

        if to_lower {
            self.lower.push(value);
        } else {
            self.upper.push(Reverse(value));
        }

        self.rebalance();

        debug_assert!(self.check_invariants());
    }

    /// Moves a single value across halves if the size constraint was broken by the last insert
    ///
    /// Routing changes one size by exactly one, so a single move always suffices.
    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(max) = self.lower.pop() {
                #[cfg(feature = "logging")]
                log::trace!("Rebalancing: moving lower max into the upper half");

                self.upper.push(Reverse(max));
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(Reverse(min)) = self.upper.pop() {
                #[cfg(feature = "logging")]
                log::trace!("Rebalancing: moving upper min into the lower half");

                self.lower.push(min);
            }
        }
    }

    /// Gets the exact median of every value inserted so far
    ///
    /// For an odd count this is the middle value itself, as [`Median::Exact`].
    /// For an even count it is the average of the two middle values, computed in `f64`, as [`Median::Mean`].
    ///
    /// Returns [`MedianError::EmptyState`] if nothing has been inserted.
    /// The tracker is left untouched either way.
    pub fn median(&self) -> Result<Median<T>> {
        match (self.lower.peek(), self.upper.peek()) {
            (None, _) => {
                #[cfg(feature = "logging")]
                log::warn!("Median requested from an empty tracker");

                Err(MedianError::EmptyState)
            }
            (Some(lo), Some(Reverse(hi))) if self.lower.len() == self.upper.len() => {
                Ok(Median::Mean((lo.to_real() + hi.to_real()) / 2.))
            }
            // Odd count: the extra value always lives in the lower half
            (Some(lo), _) => Ok(Median::Exact(lo.clone())),
        }
    }

    /// The median as a real number, or zero if nothing has been inserted
    ///
    /// Only meant for rendering a placeholder: zero is indistinguishable from a real median of zero.
    /// Use [`Self::median`] wherever the empty case matters.
    pub fn median_or_default(&self) -> f64 {
        self.median().map(|m| m.as_f64()).unwrap_or_default()
    }

    /// Discards every value, returning the tracker to its freshly constructed state
    ///
    /// Allocated capacity is kept.
    pub fn reset(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("Resetting tracker, discarding {} values", self.history.len());

        self.lower.clear();
        self.upper.clear();
        self.history.clear();
    }

    /// Snapshot of the lower half, largest first
    pub fn sorted_lower_half(&self) -> Vec<T> {
        let mut values: Vec<T> = self.lower.iter().cloned().collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }

    /// Snapshot of the upper half, smallest first
    pub fn sorted_upper_half(&self) -> Vec<T> {
        let mut values: Vec<T> = self.upper.iter().map(|Reverse(v)| v.clone()).collect();
        values.sort_unstable();
        values
    }

    /// Checks that the halves are ordered, balanced, and account for every inserted value
    pub fn check_invariants(&self) -> bool {
        let ordered = match (self.lower.peek(), self.upper.peek()) {
            (Some(lo), Some(Reverse(hi))) => lo <= hi,
            _ => true,
        };
        let balanced =
            self.lower.len() == self.upper.len() || self.lower.len() == self.upper.len() + 1;
        let complete = self.lower.len() + self.upper.len() == self.history.len();

        ordered && balanced && complete
    }
}

impl<T: Scalar> Extend<T> for Tracker<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Scalar> FromIterator<T> for Tracker<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tracker = Self::new();
        tracker.extend(iter);
        tracker
    }
}
