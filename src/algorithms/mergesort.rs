//! The mergesort implementations
//!
//! [`InPlaceMergeSort`] merges by shifting elements inside the slice and needs no extra memory,
//! at the price of a quadratic worst case. [`CopyMergeSort`] merges back and forth between the
//! slice and a buffer of the same length, either [`MergeSortType::BottomUp`] or
//! [`MergeSortType::TopDown`].

use std::cmp::Ordering;

use crate::SortError;

/// The in place Mergesort [`super::Sort`]
pub struct InPlaceMergeSort;

impl super::Sort for InPlaceMergeSort {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "in-place-merge".to_string()
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        in_place_mergesort(slice, &mut compare);
    }
}

/// Sort both halves, then merge them unless they are already in order
fn in_place_mergesort<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: &mut F) {
    if slice.len() < 2 {
        return;
    }

    let middle = slice.len() / 2;

    let (left, right) = slice.split_at_mut(middle);
    in_place_mergesort(left, compare);
    in_place_mergesort(right, compare);

    if compare(&slice[middle - 1], &slice[middle]) == Ordering::Greater {
        merge_in_place(slice, middle, compare);
    }
}

/// Merge the sorted runs `slice[..middle]` and `slice[middle..]` without a buffer
///
/// Whenever the head of the right run is smaller than the head of the left run, it is rotated
/// in front of the left run, which moves the rest of the left run one step to the right.
fn merge_in_place<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    mut middle: usize,
    compare: &mut F,
) {
    let mut left = 0;

    while left < middle && middle < slice.len() {
        if compare(&slice[left], &slice[middle]) != Ordering::Greater {
            left += 1;
        } else {
            slice[left..=middle].rotate_right(1);
            left += 1;
            middle += 1;
        }
    }
}

/// The merging order of a [`CopyMergeSort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeSortType {
    /// Merge runs of doubling width, starting at width 1
    BottomUp,
    /// Recursively split at the middle, the slice and the buffer swap roles on every level
    #[default]
    TopDown,
}

impl std::fmt::Display for MergeSortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MergeSortType::BottomUp => "bottom-up",
            MergeSortType::TopDown => "top-down",
        })
    }
}

impl std::str::FromStr for MergeSortType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom-up" => Ok(MergeSortType::BottomUp),
            "top-down" => Ok(MergeSortType::TopDown),
            _ => Err(SortError::UnsupportedMode(s.to_string())),
        }
    }
}

/// The default `BOTTOM_UP` parameter for [`CopyMergeSort`]
pub const DEFAULT_BOTTOM_UP: bool = false;

/// The copy based Mergesort [`super::BufferedSort`], `BOTTOM_UP` selects
/// [`MergeSortType::BottomUp`]
pub struct CopyMergeSort<const BOTTOM_UP: bool = DEFAULT_BOTTOM_UP>;

impl<const BOTTOM_UP: bool> CopyMergeSort<BOTTOM_UP> {
    const STRATEGY: MergeSortType = if BOTTOM_UP {
        MergeSortType::BottomUp
    } else {
        MergeSortType::TopDown
    };
}

impl<const BOTTOM_UP: bool> super::BufferedSort for CopyMergeSort<BOTTOM_UP> {
    const IS_STABLE: bool = true;

    fn display() -> String {
        format!("copy-merge-{}", Self::STRATEGY)
    }

    fn sort_with_buffer_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(
        source: &mut [T],
        target: &mut [T],
        compare: F,
    ) -> Result<(), SortError> {
        merge_sort_copy_by(source, target, Self::STRATEGY, compare)
    }

    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        if slice.len() < 2 {
            return;
        }

        // Any contents will do, the buffer is overwritten before it is read
        let mut buffer = slice.to_vec();

        merge_sort_copy_unchecked(slice, &mut buffer, Self::STRATEGY, &mut compare);
    }
}

/// Sort `source` with a copy based mergesort, using `target` as the work buffer.
///
/// The sorted result always ends up in `source`, the contents of `target` are unspecified
/// afterwards.
///
/// # Errors
///
/// Returns [`SortError::BufferLengthMismatch`] if `target` is not as long as `source`.
pub fn merge_sort_copy_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    source: &mut [T],
    target: &mut [T],
    strategy: MergeSortType,
    mut compare: F,
) -> Result<(), SortError> {
    if source.len() != target.len() {
        log::debug!(
            "rejected merge buffer: source {} / target {}",
            source.len(),
            target.len()
        );
        return Err(SortError::BufferLengthMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }

    merge_sort_copy_unchecked(source, target, strategy, &mut compare);
    Ok(())
}

fn merge_sort_copy_unchecked<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    source: &mut [T],
    target: &mut [T],
    strategy: MergeSortType,
    compare: &mut F,
) {
    debug_assert_eq!(source.len(), target.len());

    if source.len() < 2 {
        return;
    }

    match strategy {
        MergeSortType::BottomUp => bottom_up_mergesort(source, target, compare),
        MergeSortType::TopDown => {
            // One time copy, afterwards both slices hold the same elements
            target.clone_from_slice(source);
            top_down_split_merge(source, target, compare);
        }
    }
}

/// Merge runs of width 1, 2, 4, ... from `source` into `target`, moving the result back into
/// `source` after every pass
fn bottom_up_mergesort<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    source: &mut [T],
    target: &mut [T],
    compare: &mut F,
) {
    let len = source.len();
    let mut width = 1;

    while width < len {
        for start in (0..len).step_by(2 * width) {
            let middle = std::cmp::min(start + width, len);
            let end = std::cmp::min(start + 2 * width, len);
            merge_into(
                &source[start..end],
                middle - start,
                &mut target[start..end],
                compare,
            );
        }

        // The old contents of `source` are garbage now, no need to copy them
        source.swap_with_slice(target);
        width *= 2;
    }
}

/// Sort the elements shared by `dest` and `src` into `dest`
///
/// Both halves are sorted into `src` first (with `dest` as their work buffer) and then merged
/// into `dest`. Requires that `dest` and `src` hold the same elements.
fn top_down_split_merge<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    dest: &mut [T],
    src: &mut [T],
    compare: &mut F,
) {
    if dest.len() < 2 {
        return;
    }

    let middle = dest.len() / 2;

    let (src_left, src_right) = src.split_at_mut(middle);
    let (dest_left, dest_right) = dest.split_at_mut(middle);
    top_down_split_merge(src_left, dest_left, compare);
    top_down_split_merge(src_right, dest_right, compare);

    merge_into(src, middle, dest, compare);
}

/// Merge the sorted runs `src[..middle]` and `src[middle..]` into `dest`
///
/// On equal elements the left run goes first.
fn merge_into<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    src: &[T],
    middle: usize,
    dest: &mut [T],
    compare: &mut F,
) {
    debug_assert_eq!(src.len(), dest.len());

    let (mut left, mut right) = (0, middle);
    for slot in dest.iter_mut() {
        let take_left = left < middle
            && (right == src.len() || compare(&src[right], &src[left]) != Ordering::Less);

        if take_left {
            slot.clone_from(&src[left]);
            left += 1;
        } else {
            slot.clone_from(&src[right]);
            right += 1;
        }
    }
}
