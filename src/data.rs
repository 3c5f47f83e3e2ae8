//! Random input data for the sorting experiments

use std::{fmt, marker::PhantomData};

use rand::{distr::Distribution, rngs::StdRng, seq::SliceRandom as _};

/// A trait for generalizing sorting data creation
pub trait Data<T: Sized + Ord + fmt::Debug> {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T>;
}

/// Values drawn uniformly from the whole range of the type
#[derive(Debug)]
pub struct UniformData<T>(PhantomData<T>);

/// A random permutation of `0..size`
#[derive(Debug)]
pub struct PermutationData<T>(PhantomData<T>);

/// Values drawn uniformly from `0..K`, lots of duplicates for small `K`
#[derive(Debug)]
pub struct FewUniqueData<T, const K: u64>(PhantomData<T>);

/// Values drawn from a normal distribution around `size / 2` with standard deviation
/// `size / 8`, rounded and clamped to the type
#[derive(Debug)]
pub struct NormalData<T>(PhantomData<T>);

/// The already sorted sequence `0..size`
#[derive(Debug)]
pub struct SortedData<T>(PhantomData<T>);

/// The sequence `0..size` in descending order
#[derive(Debug)]
pub struct ReversedData<T>(PhantomData<T>);

macro_rules! impl_for_integers {
    ($($type:ty),*) => {
        $(
            impl_for_integers!(@single $type);
        )*
    };
    (@single $type:ty) => {
        impl Data<$type> for UniformData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                rand::distr::Uniform::new_inclusive(<$type>::MIN, <$type>::MAX)
                    .expect("the full range of an integer type is a valid uniform range")
                    .sample_iter(rng)
                    .take(size)
                    .collect()
            }
        }

        impl Data<$type> for PermutationData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                let mut values: Vec<$type> = (0..size).map(|value| value as $type).collect();
                values.shuffle(rng);
                values
            }
        }

        impl<const K: u64> Data<$type> for FewUniqueData<$type, K> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                let upper = <$type>::try_from(K).unwrap_or(<$type>::MAX).max(1);
                rand::distr::Uniform::new(0, upper)
                    .expect("the range is non-empty")
                    .sample_iter(rng)
                    .take(size)
                    .collect()
            }
        }

        impl Data<$type> for NormalData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                let mean = size as f64 / 2.0;
                let std_dev = (size as f64 / 8.0).max(1.0);
                rand_distr::Normal::new(mean, std_dev)
                    .expect("the standard deviation is finite and positive")
                    .sample_iter(rng)
                    .take(size)
                    // `as` saturates at the bounds of the target type
                    .map(|value: f64| value.round() as $type)
                    .collect()
            }
        }

        impl Data<$type> for SortedData<$type> {
            fn initialize(size: usize, _rng: &mut StdRng) -> Vec<$type> {
                (0..size).map(|value| value as $type).collect()
            }
        }

        impl Data<$type> for ReversedData<$type> {
            fn initialize(size: usize, _rng: &mut StdRng) -> Vec<$type> {
                (0..size).rev().map(|value| value as $type).collect()
            }
        }
    }
}

// Implement the Data trait for the default integer types
impl_for_integers!(u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;

    const SIZE: usize = 1000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(crate::test::TEST_SEED)
    }

    #[test]
    fn permutation() {
        let mut values = PermutationData::<u32>::initialize(SIZE, &mut rng());
        assert!(!values.is_sorted());
        values.sort();
        assert!(values.iter().copied().eq(0..SIZE as u32));
    }

    #[test]
    fn uniform() {
        let values = UniformData::<u64>::initialize(SIZE, &mut rng());
        assert_eq!(values.len(), SIZE);
    }

    #[test]
    fn few_unique() {
        let values = FewUniqueData::<u64, 4>::initialize(SIZE, &mut rng());
        assert_eq!(values.len(), SIZE);
        assert!(values.iter().all(|&value| value < 4));
    }

    #[test]
    fn normal() {
        let values = NormalData::<u32>::initialize(SIZE, &mut rng());
        let summary = crate::stats::mean(values.iter().copied());
        assert_eq!(summary.count, SIZE);
        assert!((summary.mean - SIZE as f64 / 2.0).abs() < 25.0);
    }

    #[test]
    fn sorted_and_reversed() {
        assert_eq!(SortedData::<u32>::initialize(4, &mut rng()), [0, 1, 2, 3]);
        assert_eq!(ReversedData::<u64>::initialize(4, &mut rng()), [3, 2, 1, 0]);
        assert!(SortedData::<u64>::initialize(0, &mut rng()).is_empty());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(
            PermutationData::<u64>::initialize(SIZE, &mut rng()),
            PermutationData::<u64>::initialize(SIZE, &mut rng())
        );
    }
}
