//! The quicksort implementation and the Lomuto partition it shares with
//! [`super::quickselect`]

use std::cmp::Ordering;

/// The quicksort [`super::Sort`]
///
/// Always pivots on the last element, so already sorted input takes quadratic time and linear
/// recursion depth.
pub struct QuickSort;

impl super::Sort for QuickSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "lomuto-quick".to_string()
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        quicksort(slice, &mut compare);
    }
}

/// Quicksort the given slice
fn quicksort<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: &mut F) {
    if slice.len() < 2 {
        return;
    }

    let pivot = partition_by(slice, slice.len() - 1, compare);

    // Recurse into both partitions, the pivot is in place
    let (left, right) = slice.split_at_mut(pivot);
    quicksort(left, compare);
    quicksort(&mut right[1..], compare);
}

/// Lomuto partition of `slice` around the element at `pivot_index`.
///
/// Afterwards every element left of the returned index is less than the pivot, the pivot sits
/// at the returned index and every element to its right is not less than it.
pub fn partition_by<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    pivot_index: usize,
    compare: &mut F,
) -> usize {
    assert!(
        pivot_index < slice.len(),
        "Pivot index needs to be in bounds"
    );

    let last = slice.len() - 1;
    slice.swap(pivot_index, last);

    let mut boundary = 0;
    for i in 0..last {
        if compare(&slice[i], &slice[last]) == Ordering::Less {
            slice.swap(i, boundary);
            boundary += 1;
        }
    }

    slice.swap(boundary, last);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 50;
    const TEST_SIZE: usize = 10_000;

    #[test]
    fn empty() {
        crate::test::test_empty::<QuickSort>();
    }

    #[test]
    fn scenarios() {
        crate::test::test_scenarios::<QuickSort>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, QuickSort>();
    }

    #[test]
    fn random_comparator() {
        crate::test::test_random_comparator::<TEST_SIZE, QuickSort>();
    }

    #[test]
    fn sorted_input_is_quadratic() {
        let mut comparisons = 0usize;
        let mut values: Vec<u32> = (0..200).collect();
        <QuickSort as crate::algorithms::Sort>::sort_by(&mut values, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        assert!(values.iter().copied().eq(0..200));
        assert_eq!(comparisons, 200 * 199 / 2);
    }

    #[test]
    fn partition() {
        let mut values = [9, 2, 7, 4, 1];
        let pivot = partition_by(&mut values, 3, &mut i32::cmp);

        assert_eq!(pivot, 2);
        assert_eq!(values[pivot], 4);
        assert!(values[..pivot].iter().all(|&value| value < 4));
        assert!(values[pivot + 1..].iter().all(|&value| value >= 4));
    }

    #[quickcheck_macros::quickcheck]
    fn sorted(values: Vec<i32>) -> bool {
        crate::test::is_sorted_permutation::<QuickSort>(values)
    }
}
