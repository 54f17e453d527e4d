use thiserror::Error;

/// Errors returned by [`crate::Tracker`] queries
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianError {
    /// The median was requested before any value was inserted
    ///
    /// This is also what a freshly reset tracker returns.
    #[error("median is undefined: no values have been inserted")]
    EmptyState,
}

/// Result alias used throughout the crate
pub type Result<T, E = MedianError> = std::result::Result<T, E>;
