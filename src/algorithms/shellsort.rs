//! The shell sort implementation

use std::cmp::Ordering;

use crate::error::{GapSequenceError, SortError};

/// The default gap sequence, the well known prefix of Ciura's sequence
pub const DEFAULT_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// The shell [`super::Sort`] using [`DEFAULT_GAPS`]
pub struct ShellSort;

impl super::Sort for ShellSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "shell".to_string()
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        shell_sort_unchecked(slice, &DEFAULT_GAPS, &mut compare);
    }
}

/// Sort `slice` with a custom gap sequence.
///
/// # Errors
///
/// Returns [`SortError::InvalidGapSequence`] if `gaps` is not a strictly decreasing sequence of
/// positive integers ending in 1. Nothing is sorted in that case.
pub fn shell_sort_with_gaps_by<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    gaps: &[usize],
    mut compare: F,
) -> Result<(), SortError> {
    validate_gaps(gaps).inspect_err(|error| log::debug!("rejected gap sequence {gaps:?}: {error}"))?;
    shell_sort_unchecked(slice, gaps, &mut compare);

    Ok(())
}

/// Check that `gaps` is usable as a shell sort gap sequence
pub fn validate_gaps(gaps: &[usize]) -> Result<(), GapSequenceError> {
    let Some(&last) = gaps.last() else {
        return Err(GapSequenceError::Empty);
    };

    for (position, &gap) in gaps.iter().enumerate() {
        if gap == 0 {
            return Err(GapSequenceError::Zero { position });
        }
        if position > 0 && gap >= gaps[position - 1] {
            return Err(GapSequenceError::NotDecreasing { position, gap });
        }
    }

    if last != 1 {
        return Err(GapSequenceError::DoesNotEndInOne { last });
    }

    Ok(())
}

/// One gapped insertion sort pass per gap, over all residue classes at once
fn shell_sort_unchecked<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    gaps: &[usize],
    compare: &mut F,
) {
    for &gap in gaps {
        if gap >= slice.len() {
            log::trace!("skipping gap {gap} for slice of length {}", slice.len());
            continue;
        }

        for i in gap..slice.len() {
            let mut j = i;
            while j >= gap && compare(&slice[j - gap], &slice[j]) == Ordering::Greater {
                slice.swap(j - gap, j);
                j -= gap;
            }
        }
    }
}
