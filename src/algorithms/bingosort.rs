//! The bingo sort implementation

use std::cmp::Ordering;

/// The bingo [`super::Sort`]
///
/// A selection sort for inputs with many duplicates: every sweep moves all elements equal to
/// the current maximum to the back and finds the next lower maximum on the way, so each distinct
/// value costs a single sweep.
pub struct BingoSort;

impl super::Sort for BingoSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "bingo".to_string()
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: F) {
        if slice.len() < 2 {
            return;
        }

        // `slice[end..]` is sorted and holds the largest elements
        let mut end = slice.len();
        let mut max = index_of_max(slice, &mut compare);

        while end > 1 {
            // Park one copy of the current maximum at the back, it is the reference for the sweep
            end -= 1;
            slice.swap(max, end);

            let mut next_max = None;
            let mut i = 0;
            while i < end {
                if compare(&slice[i], &slice[end]) == Ordering::Equal {
                    end -= 1;
                    slice.swap(i, end);
                    // `slice[i]` now holds an unvisited element, look at it again
                } else {
                    if next_max.is_none_or(|m| compare(&slice[i], &slice[m]) == Ordering::Greater) {
                        next_max = Some(i);
                    }
                    i += 1;
                }
            }

            match next_max {
                Some(index) => max = index,
                None => break,
            }
        }
    }
}

/// Index of the first maximum of a non-empty `slice`
fn index_of_max<T, F: FnMut(&T, &T) -> Ordering>(slice: &[T], compare: &mut F) -> usize {
    let mut max = 0;
    for i in 1..slice.len() {
        if compare(&slice[i], &slice[max]) == Ordering::Greater {
            max = i;
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Sort as _;

    const RUNS: usize = 10;
    const TEST_SIZE: usize = 1000;

    #[test]
    fn empty() {
        crate::test::test_empty::<BingoSort>();
    }

    #[test]
    fn scenarios() {
        crate::test::test_scenarios::<BingoSort>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, BingoSort>();
    }

    #[test]
    fn random_comparator() {
        crate::test::test_random_comparator::<TEST_SIZE, BingoSort>();
    }

    #[test]
    fn one_sweep_per_distinct_value() {
        let mut rng = crate::test::test_rng();
        let mut values: Vec<u8> = std::iter::repeat_n(0..4, 250).flatten().collect();
        rand::seq::SliceRandom::shuffle(values.as_mut_slice(), &mut rng);

        let mut comparisons = 0;
        BingoSort::sort_by(&mut values, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        assert!(values.is_sorted());
        // Initial maximum search plus at most two comparisons per element and sweep
        assert!(comparisons <= 999 + 4 * 2 * 1000, "{comparisons} comparisons");
    }

    #[quickcheck_macros::quickcheck]
    fn sorted(values: Vec<i32>) -> bool {
        crate::test::is_sorted_permutation::<BingoSort>(values)
    }
}
