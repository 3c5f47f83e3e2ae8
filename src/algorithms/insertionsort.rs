//! Multiple insertion sort implementations

use std::cmp::Ordering;

/// The default `BINARY` parameter for `InsertionSort`
pub const DEFAULT_BINARY: bool = false;

/// The insertion [`super::Sort`]
pub struct InsertionSort<const BINARY: bool = DEFAULT_BINARY>;

impl<const BINARY: bool> super::Sort for InsertionSort<BINARY> {
    const IS_STABLE: bool = true;

    fn display() -> String {
        if BINARY {
            "binary-insertion".to_string()
        } else {
            "insertion".to_string()
        }
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        if slice.len() < 2 {
            return;
        }

        if BINARY {
            binary_insertion_sort_with_partition(slice, 1, &mut compare);
        } else {
            insertion_sort_with_partition(slice, 1, &mut compare);
        }
    }
}

/// Sort slice using insertion sort, assuming that `slice[0..partition]` is already in order
fn insertion_sort_with_partition<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    partition_point: usize,
    compare: &mut F,
) {
    assert!(
        (0..slice.len()).contains(&partition_point),
        "Partition point needs to be in bounds"
    );

    for i in partition_point..slice.len() {
        // Shift the key left past every strictly greater element
        for j in (0..i).rev() {
            if compare(&slice[j], &slice[j + 1]) == Ordering::Greater {
                slice.swap(j + 1, j);
            } else {
                break;
            }
        }
    }
}

/// Sort slice using binary insertion sort, assuming that `slice[0..partition]` is already in order
fn binary_insertion_sort_with_partition<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    partition_point: usize,
    compare: &mut F,
) {
    assert!(
        (0..slice.len()).contains(&partition_point),
        "Partition point needs to be in bounds"
    );

    for i in partition_point..slice.len() {
        // Upper bound among equal elements, necessary for stability
        let (mut low, mut high) = (0, i);
        while low < high {
            let middle = low + (high - low) / 2;
            if compare(&slice[i], &slice[middle]) == Ordering::Less {
                high = middle;
            } else {
                low = middle + 1;
            }
        }

        slice[low..=i].rotate_right(1);
    }
}
