#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
mod median;
mod scalar;
mod tracker;

pub use error::{MedianError, Result};
pub use median::Median;
pub use scalar::Scalar;
pub use tracker::Tracker;
