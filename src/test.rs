//! Contains various helpers intended for testing purposes

use std::cmp::Ordering;

use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};

use crate::algorithms::{BufferedSort, Sort};

/// The seed shared by all tests
pub const TEST_SEED: u64 = 0xa8bf17eb656f828d;
/// The rng used by each test
pub type Rng = rand::rngs::SmallRng;

/// Generate the `Rng` for a test
pub fn test_rng() -> Rng {
    Rng::seed_from_u64(TEST_SEED)
}

/// Unifies [`Sort`] and [`BufferedSort`] so the helpers below work for both
pub trait Sorter {
    const IS_STABLE: bool;

    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: F);

    fn sort<T: Ord + Clone>(slice: &mut [T]) {
        Self::sort_by(slice, T::cmp);
    }
}

impl<S: Sort> Sorter for S {
    const IS_STABLE: bool = S::IS_STABLE;

    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: F) {
        <S as Sort>::sort_by(slice, compare);
    }
}

/// Runs a [`BufferedSort`] through the [`Sorter`] helpers
pub struct Buffered<S>(std::marker::PhantomData<S>);

impl<S: BufferedSort> Sorter for Buffered<S> {
    const IS_STABLE: bool = S::IS_STABLE;

    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: F) {
        <S as BufferedSort>::sort_by(slice, compare);
    }
}

/// A Wrapper struct that tracks an original index with an ordered element,
/// used to test sort results for stability
#[derive(Debug, Clone)]
pub struct IndexedOrdered<T: Ord>(pub usize, pub T);

impl<T: Ord> IndexedOrdered<T> {
    /// Create a new iterator of `IndexedOrdered`, tracking the position of each element in `iter`
    pub fn map_iter(iter: impl Iterator<Item = T>) -> impl Iterator<Item = Self> {
        iter.enumerate()
            .map(|(index, element)| Self(index, element))
    }

    /// Check `slice` is sorted and check for stability, e.g. equal elements keeping initial ordering.
    pub fn is_stable_sorted(slice: &[Self]) -> bool {
        if slice.len() < 2 {
            return true;
        }

        let mut previous = &slice[0];
        for current in slice[1..].iter() {
            match current.cmp(previous) {
                // Slice is not sorted
                Ordering::Less => return false,
                // Elements are not stable
                Ordering::Equal if current.0 < previous.0 => return false,
                _ => {}
            }

            previous = current;
        }

        true
    }
}

impl<T: Ord> PartialEq for IndexedOrdered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<T: Ord> Eq for IndexedOrdered<T> {}

impl<T: Ord> PartialOrd for IndexedOrdered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for IndexedOrdered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

/// Test the sort on an empty slice
pub fn test_empty<S: Sorter>() {
    S::sort::<usize>(&mut []);
}

/// Test the sort on some random ordered slices and check they are sorted permutations afterwards
pub fn test_random_sorted<const RUNS: usize, const TEST_SIZE: usize, S: Sorter>() {
    let mut rng = test_rng();

    let expected: Box<[usize]> = (0..TEST_SIZE).collect();
    let mut values = expected.clone();

    for run in 0..RUNS {
        values.shuffle(&mut rng);
        S::sort(&mut values);
        assert_eq!(values, expected, "Run {run} was not sorted");
    }

    let mut values: Box<[usize]> = std::iter::repeat_n(0..TEST_SIZE / 4, 4).flatten().collect();
    let mut expected = values.clone();
    expected.sort();
    for run in 0..RUNS {
        values.shuffle(&mut rng);
        S::sort(&mut values);
        assert_eq!(values, expected, "Run {run} was not sorted");
    }
}

/// Like [`test_random_sorted`] but additionally checks that the sort was stable
pub fn test_random_stable_sorted<const RUNS: usize, const TEST_SIZE: usize, S: Sorter>() {
    assert!(S::IS_STABLE);

    let mut rng = test_rng();
    let mut values: Box<[usize]> = std::iter::repeat_n(0..TEST_SIZE / 4, 4).flatten().collect();
    let mut ordered_values: Box<[IndexedOrdered<usize>]>;

    for run in 0..RUNS {
        values.shuffle(&mut rng);
        ordered_values = IndexedOrdered::map_iter(values.iter().copied()).collect();
        S::sort(&mut ordered_values);
        assert!(
            IndexedOrdered::is_stable_sorted(&ordered_values),
            "Run {run} was not stable sorted"
        );
    }
}

/// Sort with a comparator answering randomly, the result has to be a permutation of the input
pub fn test_random_comparator<const TEST_SIZE: usize, S: Sorter>() {
    let mut rng = test_rng();

    let mut values: Box<[usize]> = (0..TEST_SIZE).collect();
    values.shuffle(&mut rng);

    S::sort_by(&mut values, |_, _| match rng.random_range(0..3) {
        0 => Ordering::Less,
        1 => Ordering::Equal,
        _ => Ordering::Greater,
    });

    values.sort_unstable();
    assert!(values.iter().copied().eq(0..TEST_SIZE));
}

/// Check the fixed input/output pairs every sort has to satisfy
pub fn test_scenarios<S: Sorter>() {
    let mut values = [5, 3, 8, 1, 9, 2];
    S::sort(&mut values);
    assert_eq!(values, [1, 2, 3, 5, 8, 9]);

    // Already sorted input stays as it is
    S::sort(&mut values);
    assert_eq!(values, [1, 2, 3, 5, 8, 9]);

    let mut values = [5, 3, 8, 1, 9, 2];
    S::sort_by(&mut values, |a, b| b.cmp(a));
    assert_eq!(values, [9, 8, 5, 3, 2, 1]);

    let mut values = [7];
    S::sort(&mut values);
    assert_eq!(values, [7]);

    let mut values = [4, 4, 4, 4];
    S::sort(&mut values);
    assert_eq!(values, [4, 4, 4, 4]);

    let mut values = [2, 1];
    S::sort(&mut values);
    assert_eq!(values, [1, 2]);

    let mut values = [3, 1, 3, 2, 1, 0, 3];
    S::sort(&mut values);
    assert_eq!(values, [0, 1, 1, 2, 3, 3, 3]);
}

/// Check a small stable scenario by hand, `(key, original position)` compared by key only
pub fn test_stable_scenario<S: Sorter>() {
    assert!(S::IS_STABLE);

    let mut values = [(3, 0), (1, 1), (3, 2), (2, 3), (1, 4)];
    S::sort_by(&mut values, |a, b| a.0.cmp(&b.0));
    assert_eq!(values, [(1, 1), (1, 4), (2, 3), (3, 0), (3, 2)]);
}

/// Property shared by the quickcheck tests: the sort returns a sorted permutation
pub fn is_sorted_permutation<S: Sorter>(mut values: Vec<i32>) -> bool {
    let mut expected = values.clone();
    expected.sort();
    S::sort(&mut values);
    values == expected
}
