//! An example showcasing tracking the median of a custom data type
//!
//! Floats are not [`Ord`], so we wrap them in a newtype with a total order

use std::cmp::Ordering;

use running_median::{Scalar, Tracker};

/// A temperature reading in degrees Celsius
///
/// Readings are compared with [`f64::total_cmp`], which gives a total order
#[derive(Debug, Clone, Copy)]
struct Celsius(f64);

impl PartialEq for Celsius {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Scalar for Celsius {
    fn to_real(&self) -> f64 {
        self.0
    }
}

/// Some readings from a sensor
///
/// Note that the exact median is 19.5
const DATA: [f64; 10] = [18.2, 21.0, 19.4, 25.3, 17.8, 19.6, 20.1, 16.9, 22.4, 19.0];

fn main() {
    // It just works!
    let tracker: Tracker<Celsius> = DATA.into_iter().map(Celsius).collect();

    match tracker.median() {
        Ok(median) => println!("The median temperature is: {:.2} °C", median.as_f64()),
        Err(e) => println!("No readings: {e}"),
    }
}
