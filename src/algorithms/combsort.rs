//! The comb sort implementation

use std::cmp::Ordering;

/// The shrink factor `1.3` as a fraction, applied as `gap * 10 / 13`
const SHRINK_NUMERATOR: usize = 10;
const SHRINK_DENOMINATOR: usize = 13;

/// The comb [`super::Sort`]
///
/// Passes continue until one at gap 1 swaps nothing. A comparator that is not a consistent
/// total order may keep reporting inversions, and then the sort does not terminate.
pub struct CombSort;

impl super::Sort for CombSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "comb".to_string()
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        let mut gap = slice.len();

        loop {
            gap = std::cmp::max(gap * SHRINK_NUMERATOR / SHRINK_DENOMINATOR, 1);

            let mut swapped = false;
            for i in 0..slice.len().saturating_sub(gap) {
                if compare(&slice[i], &slice[i + gap]) == Ordering::Greater {
                    slice.swap(i, i + gap);
                    swapped = true;
                }
            }

            if gap == 1 && !swapped {
                break;
            }
        }
    }
}
