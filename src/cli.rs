//! Command line input handling

use std::marker::PhantomData;

use sortlab::algorithms::{self, BufferedSort, Sort};

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The sorting algorithm to run
    #[arg()]
    pub algorithm: Algorithm,
    /// The data type to use for sorting
    #[arg()]
    pub data: DataType,
    /// The algorithm variant, use `-v=-1` to print available options
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub variant: isize,
    /// The number of runs to do
    #[arg(short, long, default_value_t = 100)]
    pub runs: usize,
    /// The size of the slices to sort
    #[arg(short, long, default_value_t = 10_000)]
    pub size: usize,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// The output file to write the samples to, one duration in nanoseconds per line
    pub output: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// The sorts in [`std`]
    Std,
    /// Bubblesort
    Bubblesort,
    /// Insertionsort
    Insertionsort,
    /// Selectionsort
    Selectionsort,
    /// Combsort
    Combsort,
    /// Bingosort
    Bingosort,
    /// Shellsort
    Shellsort,
    /// Heapsort
    Heapsort,
    /// Mergesort
    Mergesort,
    /// Quicksort
    Quicksort,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match clap::ValueEnum::to_possible_value(self) {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// A sort the experiment can run, either a [`Sort`] or a [`BufferedSort`]
pub trait Runnable {
    const IS_STABLE: bool;

    fn display() -> String;

    fn run<T: Ord + Clone>(slice: &mut [T]);
}

/// Runs a [`Sort`]
pub struct Plain<S>(PhantomData<S>);

impl<S: Sort> Runnable for Plain<S> {
    const IS_STABLE: bool = S::IS_STABLE;

    fn display() -> String {
        S::display()
    }

    fn run<T: Ord + Clone>(slice: &mut [T]) {
        S::sort(slice);
    }
}

/// Runs a [`BufferedSort`], allocating its buffer
pub struct Buffered<S>(PhantomData<S>);

impl<S: BufferedSort> Runnable for Buffered<S> {
    const IS_STABLE: bool = S::IS_STABLE;

    fn display() -> String {
        S::display()
    }

    fn run<T: Ord + Clone>(slice: &mut [T]) {
        S::sort(slice);
    }
}

macro_rules! declare_variants {
    (
        $name:ident {
            $(
                $top_algorithm:pat => [
                    $(
                        $variant:ty
                    ),*
                    $(,)?
                ]
            ),*
            $(,)?
        }
    ) => {
        pub struct $name;

        impl $name {
            pub fn variants(algorithm: Algorithm) -> impl Iterator<Item = String> {
                let mut variants = Vec::new();
                declare_variants! { @match_algorithm
                    algorithm => Variant
                    ($(
                        $top_algorithm => [
                            $($variant),*
                        ]
                    ),*)
                    {
                        variants.push(<Variant as Runnable>::display())
                    }
                }
                variants.into_iter()
            }

            pub fn sorter<T: Ord + Clone>(
                algorithm: Algorithm,
                variant: usize,
            ) -> Option<fn(&mut [T])> {
                let mut index = 0;

                declare_variants! { @match_algorithm
                    algorithm => Variant
                    ($(
                        $top_algorithm => [
                            $($variant),*
                        ]
                    ),*)
                    {
                        if variant == index {
                            return Some(<Variant as Runnable>::run::<T>);
                        } else {
                            index += 1;
                        }
                    }
                }

                None
            }

            pub fn is_stable(algorithm: Algorithm, variant: usize) -> Option<bool> {
                let mut index = 0;

                declare_variants! { @match_algorithm
                    algorithm => Variant
                    ($(
                        $top_algorithm => [
                            $($variant),*
                        ]
                    ),*)
                    {
                        if variant == index {
                            return Some(<Variant as Runnable>::IS_STABLE);
                        } else {
                            index += 1;
                        }
                    }
                }

                None
            }
        }
    };
    (@match_algorithm
        $alg:expr => $variant_name:ident
        ($(
            $top_algorithm:pat => [
                $($variant:ty),*
            ]
        ),*)
        $code:block
    ) => {
        match $alg {
            $(
                $top_algorithm => {
                    $(
                        {
                            type $variant_name = $variant;

                            $code
                        }
                    )*
                }
            )*
        }
    };
}

declare_variants! {
    AlgorithmVariants {
        Algorithm::Std => [
            Plain<algorithms::StdSort>,
            Plain<algorithms::StdSort<false>>,
        ],
        Algorithm::Bubblesort => [
            Plain<algorithms::bubblesort::BubbleSort>,
        ],
        Algorithm::Insertionsort => [
            Plain<algorithms::insertionsort::InsertionSort>,
            Plain<algorithms::insertionsort::InsertionSort<true>>,
        ],
        Algorithm::Selectionsort => [
            Plain<algorithms::selectionsort::SelectionSort>,
        ],
        Algorithm::Combsort => [
            Plain<algorithms::combsort::CombSort>,
        ],
        Algorithm::Bingosort => [
            Plain<algorithms::bingosort::BingoSort>,
        ],
        Algorithm::Shellsort => [
            Plain<algorithms::shellsort::ShellSort>,
        ],
        Algorithm::Heapsort => [
            Plain<algorithms::heapsort::HeapSort>,
            Plain<algorithms::heapsort::HeapSort<true>>,
        ],
        Algorithm::Mergesort => [
            Plain<algorithms::mergesort::InPlaceMergeSort>,
            Buffered<algorithms::mergesort::CopyMergeSort<true>>,
            Buffered<algorithms::mergesort::CopyMergeSort<false>>,
        ],
        Algorithm::Quicksort => [
            Plain<algorithms::quicksort::QuickSort>,
        ],
    }
}

impl AlgorithmVariants {
    pub fn validate(algorithm: Algorithm, variant: isize) -> Option<usize> {
        match variant.try_into() {
            Err(_) => None,
            Ok(result) => {
                if result < Self::variants(algorithm).count() {
                    Some(result)
                } else {
                    None
                }
            }
        }
    }
}

/// Receives the element and generator types selected by a [`DataType`]
pub trait DataVisitor {
    type Output;

    fn visit<T, D>(self) -> Self::Output
    where
        T: Ord + Clone + std::fmt::Debug,
        D: sortlab::data::Data<T>;
}

macro_rules! declare_data_types {
    (
        $(
            $name:ident : $type:ty, $d_type:ty
        ),*
        $(,)?
    ) => {
        /// Available data types for sorting
        #[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
        pub enum DataType {
            $(
                $name
            ),*
        }

        impl DataType {
            /// Call `visitor` with the element type and generator of this data type
            pub fn visit<V: DataVisitor>(self, visitor: V) -> V::Output {
                match self {
                    $(
                        DataType::$name => visitor.visit::<$type, $d_type>()
                    ),*
                }
            }
        }
    };
}

declare_data_types! {
    // u32
    PermutationU32: u32, sortlab::data::PermutationData<u32>,
    UniformU32: u32, sortlab::data::UniformData<u32>,
    FewUnique16U32: u32, sortlab::data::FewUniqueData<u32, 16>,

    // u64
    PermutationU64: u64, sortlab::data::PermutationData<u64>,
    UniformU64: u64, sortlab::data::UniformData<u64>,
    FewUnique16U64: u64, sortlab::data::FewUniqueData<u64, 16>,
    NormalU64: u64, sortlab::data::NormalData<u64>,
    SortedU64: u64, sortlab::data::SortedData<u64>,
    ReversedU64: u64, sortlab::data::ReversedData<u64>,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match clap::ValueEnum::to_possible_value(self) {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_sorts() {
        for algorithm in <Algorithm as clap::ValueEnum>::value_variants() {
            let count = AlgorithmVariants::variants(*algorithm).count();
            assert!(count > 0, "{algorithm} has no variants");

            for variant in 0..count {
                let sorter = AlgorithmVariants::sorter::<u32>(*algorithm, variant).unwrap();
                let mut values = [5, 3, 8, 1, 9, 2];
                sorter(&mut values);
                assert_eq!(values, [1, 2, 3, 5, 8, 9], "{algorithm} variant {variant}");
            }
        }
    }

    #[test]
    fn validate_variant() {
        assert_eq!(AlgorithmVariants::validate(Algorithm::Mergesort, 2), Some(2));
        assert_eq!(AlgorithmVariants::validate(Algorithm::Mergesort, 3), None);
        assert_eq!(AlgorithmVariants::validate(Algorithm::Heapsort, -1), None);
        assert_eq!(
            AlgorithmVariants::is_stable(Algorithm::Mergesort, 1),
            Some(true)
        );
        assert_eq!(
            AlgorithmVariants::is_stable(Algorithm::Quicksort, 0),
            Some(false)
        );
    }

    #[test]
    fn variant_names() {
        let names: Vec<String> = AlgorithmVariants::variants(Algorithm::Heapsort).collect();
        assert_eq!(names, ["heap-basic-down", "heap-floyd-down"]);
    }

    #[test]
    fn parse_args() {
        use clap::Parser as _;

        let args = Args::try_parse_from([
            "sortlab",
            "heapsort",
            "permutation-u64",
            "-v",
            "1",
            "--runs",
            "5",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(args.algorithm, Algorithm::Heapsort);
        assert_eq!(args.data, DataType::PermutationU64);
        assert_eq!(args.variant, 1);
        assert_eq!(args.runs, 5);
        assert_eq!(args.seed, Some(7));
        assert!(args.output.is_none());
    }
}
