//! A basic example showing minimal usage
//!
//! We construct a [`Tracker`], fill it with data, and then read out the median

use running_median::Tracker;

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
/// Note that the exact median is 44
const DATA: [i64; 15] = [
    18, 83, 21, 21, 63, 64, 4, 92, 31, 94, 2, 44, 70, 17, 61,
];

fn main() {
    let mut tracker = Tracker::new();

    // Read data points from our data source, and fold them into the tracker
    for data_point in DATA {
        tracker.insert(data_point);
    }

    // Get our (exact) answer
    match tracker.median() {
        Ok(median) => println!("The median is: {median}"),
        Err(e) => println!("No median: {e}"),
    }
}
