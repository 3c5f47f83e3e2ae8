//! Selection of the k-th smallest element with quickselect

use std::cmp::Ordering;

use crate::SortError;

/// Returns the element that would end up at `slice[k]` if `slice[left..=right]` were sorted
/// in place according to `compare`. `k` indexes the whole slice, not the range.
///
/// The range is partitioned repeatedly with [`super::quicksort::partition_by`], always pivoting
/// on the element currently at `k`, and narrowed to the side containing `k` until the pivot
/// lands on `k`. The range is left partially reordered.
///
/// # Errors
///
/// - [`SortError::IndexOutOfRange`] if `right` is not a valid index (this includes every
///   empty slice)
/// - [`SortError::InvalidRange`] if `left > right`
/// - [`SortError::OrderStatisticOutOfRange`] if `k` is not in `left..=right`
pub fn quickselect_by<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    mut left: usize,
    mut right: usize,
    k: usize,
    mut compare: F,
) -> Result<&T, SortError> {
    if right >= slice.len() {
        return Err(SortError::IndexOutOfRange {
            index: right,
            len: slice.len(),
        });
    }
    if left > right {
        return Err(SortError::InvalidRange { left, right });
    }
    if !(left..=right).contains(&k) {
        return Err(SortError::OrderStatisticOutOfRange { k, left, right });
    }

    while left < right {
        let pivot =
            left + super::quicksort::partition_by(&mut slice[left..=right], k - left, &mut compare);
        log::trace!("quickselect: pivot landed on {pivot} in {left}..={right}, looking for {k}");

        match k.cmp(&pivot) {
            Ordering::Equal => break,
            Ordering::Less => right = pivot - 1,
            Ordering::Greater => left = pivot + 1,
        }
    }

    Ok(&slice[k])
}

/// [`quickselect_by`] with the natural ordering of `T`
pub fn quickselect<T: Ord>(
    slice: &mut [T],
    left: usize,
    right: usize,
    k: usize,
) -> Result<&T, SortError> {
    quickselect_by(slice, left, right, k, T::cmp)
}
