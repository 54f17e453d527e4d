//! A more fully-fledged example, showcasing the other methods on [`Tracker`]

use running_median::{MedianError, Tracker};

/// Some sample data to calculate the median for
const DATA: [i64; 8] = [3, 1, 4, 1, 5, 9, 2, 6];

fn main() {
    // Pre-size the tracker, since we know how much data is coming
    let mut tracker = Tracker::with_capacity(DATA.len());

    // Nothing has been inserted yet, so there is no median
    assert_eq!(tracker.median(), Err(MedianError::EmptyState));

    for data_point in DATA {
        tracker.insert(data_point);

        // The median is available after every insert
        match tracker.median() {
            Ok(median) => println!(
                "Inserted {data_point}: median is now {median} over {} values",
                tracker.len()
            ),
            Err(e) => println!("Inserted {data_point}, but there is no median: {e}"),
        }

        // Both halves can be inspected without disturbing the tracker
        println!(
            "  lower half (largest first): {:?}",
            tracker.sorted_lower_half()
        );
        println!(
            "  upper half (smallest first): {:?}",
            tracker.sorted_upper_half()
        );
    }

    println!("Values in arrival order: {:?}", tracker.history());

    // Start over with a clean slate
    tracker.reset();
    println!("After reset, the tracker is empty: {}", tracker.is_empty());
}
