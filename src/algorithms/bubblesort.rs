//! The bubble sort implementation

use std::cmp::Ordering;

/// The bubble [`super::Sort`]
///
/// After each pass only the prefix up to the last swap is scanned again, everything behind it
/// is already in its final position.
pub struct BubbleSort;

impl super::Sort for BubbleSort {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "bubble".to_string()
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        let mut end = slice.len();

        while end > 1 {
            let mut last_swap = 0;

            for i in 1..end {
                if compare(&slice[i - 1], &slice[i]) == Ordering::Greater {
                    slice.swap(i - 1, i);
                    last_swap = i;
                }
            }

            // A pass without swaps leaves `last_swap == 0` and ends the loop
            end = last_swap;
        }
    }
}
