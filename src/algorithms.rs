//! The sorting and selection algorithms
//!
//! All algorithms work in place on a `&mut [T]` and take their ordering from a comparator
//! `FnMut(&T, &T) -> Ordering`. The natural ordering is just `T::cmp`.

use std::cmp::Ordering;

pub mod bingosort;
pub mod bubblesort;
pub mod combsort;
pub mod heapsort;
pub mod insertionsort;
pub mod mergesort;
pub mod quickselect;
pub mod quicksort;
pub mod selectionsort;
pub mod shellsort;

/// An in place sorting algorithm
pub trait Sort {
    /// Whether the sort keeps equal elements in their initial order
    const IS_STABLE: bool;

    /// String representation of this sort
    fn display() -> String;

    /// Sort `slice` ascending according to `compare`
    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: F);

    /// Sort `slice` ascending according to its natural ordering
    fn sort<T: Ord>(slice: &mut [T]) {
        Self::sort_by(slice, T::cmp);
    }
}

/// A sorting algorithm which needs a scratch buffer of the same length as the input
pub trait BufferedSort {
    /// Whether the sort keeps equal elements in their initial order
    const IS_STABLE: bool;

    /// String representation of this sort
    fn display() -> String;

    /// Sort `source` ascending according to `compare`, using `target` as scratch space.
    ///
    /// The contents of `target` are unspecified before and after the call. The sorted result
    /// always ends up in `source`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SortError::BufferLengthMismatch`] if the lengths differ
    fn sort_with_buffer_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(
        source: &mut [T],
        target: &mut [T],
        compare: F,
    ) -> Result<(), crate::SortError>;

    /// Sort `slice` according to `compare`, allocating the scratch buffer
    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: F);

    /// Sort `slice` according to its natural ordering, allocating the scratch buffer
    fn sort<T: Ord + Clone>(slice: &mut [T]) {
        Self::sort_by(slice, T::cmp);
    }
}

/// Exchange the elements at `a` and `b`.
///
/// # Errors
///
/// Returns [`crate::SortError::IndexOutOfRange`] instead of panicking when either index is
/// not in bounds.
pub fn swap<T>(slice: &mut [T], a: usize, b: usize) -> Result<(), crate::SortError> {
    for index in [a, b] {
        if index >= slice.len() {
            return Err(crate::SortError::IndexOutOfRange {
                index,
                len: slice.len(),
            });
        }
    }

    slice.swap(a, b);
    Ok(())
}

/// The default `STABLE` parameter for [`StdSort`]
pub const DEFAULT_STABLE: bool = true;

/// The sorts of the standard library, as a baseline
pub struct StdSort<const STABLE: bool = DEFAULT_STABLE>;

impl<const STABLE: bool> Sort for StdSort<STABLE> {
    const IS_STABLE: bool = STABLE;

    fn display() -> String {
        if STABLE {
            "std-stable".to_string()
        } else {
            "std-unstable".to_string()
        }
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: F) {
        if STABLE {
            slice.sort_by(compare);
        } else {
            slice.sort_unstable_by(compare);
        }
    }
}
