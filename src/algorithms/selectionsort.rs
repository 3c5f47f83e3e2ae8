//! The selection sort implementation

use std::cmp::Ordering;

/// The selection [`super::Sort`]
///
/// The minimum of the unsorted suffix is moved into place by rotating the elements between it
/// and its destination one step to the right, instead of swapping it with the destination.
/// With duplicate keys this produces a different order than the swapping variant.
pub struct SelectionSort;

impl super::Sort for SelectionSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "selection".to_string()
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        if slice.len() < 2 {
            return;
        }

        for i in 0..slice.len() - 1 {
            let mut min = i;
            for j in i + 1..slice.len() {
                if compare(&slice[j], &slice[min]) == Ordering::Less {
                    min = j;
                }
            }

            if min != i {
                slice[i..=min].rotate_right(1);
            }
        }
    }
}
