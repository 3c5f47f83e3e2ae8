//! Streaming numeric reductions and summary statistics.
//!
//! - [`sum`], [`product`] and [`mean`] fold a sequence once.
//! - [`OnlineStats`] consumes a sequence element by element and can report mean, median and
//!   mode at any point without scanning the elements again.
//! - [`pearson`] computes the correlation coefficient and covariance of two sequences in a
//!   single pass.
//!
//! Floating point results follow IEEE semantics: dividing by a zero count or a zero standard
//! deviation produces NaN or infinity instead of an error.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use num_traits::{Num, ToPrimitive};

/// The numbers the reductions in this module work on
pub trait Numeric: Num + Copy + PartialOrd + ToPrimitive {
    /// `self + other`, or `None` where the integer type would overflow
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_numeric {
    (integers: $($type:ty),*) => {
        $(
            impl Numeric for $type {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
    (floats: $($type:ty),*) => {
        $(
            impl Numeric for $type {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_numeric!(integers: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_numeric!(floats: f32, f64);

/// Sum of all elements, starting at zero
pub fn sum<T: Numeric>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(T::zero(), |acc, value| acc + value)
}

/// Product of all elements, starting at one. The empty product is one.
pub fn product<T: Numeric>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(T::one(), |acc, value| acc * value)
}

/// The result of [`mean`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mean<T> {
    /// The arithmetic mean, 0 for an empty sequence
    pub mean: f64,
    /// The sum of all elements in `T`, `None` if it does not fit
    pub sum: Option<T>,
    /// The number of elements
    pub count: usize,
}

/// Arithmetic mean in a single pass, together with the sum and the element count
///
/// The mean is accumulated in `f64`, so it stays accurate when the sum overflows `T`.
pub fn mean<T: Numeric>(values: impl IntoIterator<Item = T>) -> Mean<T> {
    let (sum, float_sum, count) = values.into_iter().fold(
        (Some(T::zero()), 0.0, 0),
        |(sum, float_sum, count), value| {
            (
                sum.and_then(|sum| sum.checked_sum(value)),
                float_sum + value.to_f64().unwrap_or(f64::NAN),
                count + 1,
            )
        },
    );

    Mean {
        mean: mean_of(float_sum, count),
        sum,
        count,
    }
}

fn mean_of(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Mean, median and mode of everything pushed so far
///
/// The median is kept with two heaps: `lower` holds the smaller half as a max-heap, `upper` the
/// larger half as a min-heap, and `lower` is never smaller than `upper` and at most one element
/// larger. The mode is tracked with a histogram. Ties go to the value that reached the highest
/// count first.
#[derive(Debug, Clone)]
pub struct OnlineStats<T> {
    sum: f64,
    count: usize,
    lower: BinaryHeap<T>,
    upper: BinaryHeap<Reverse<T>>,
    histogram: HashMap<T, usize>,
    mode: Option<(T, usize)>,
}

/// A snapshot of an [`OnlineStats`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T> {
    /// The number of values pushed
    pub count: usize,
    /// The arithmetic mean
    pub mean: f64,
    /// The median, see [`OnlineStats::median`]
    pub median: f64,
    /// The most frequent value and how often it occurred
    pub mode: (T, usize),
}

impl<T: Copy + Ord + Hash + ToPrimitive> Default for OnlineStats<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Ord + Hash + ToPrimitive> OnlineStats<T> {
    /// An accumulator that has not seen any value
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
            histogram: HashMap::new(),
            mode: None,
        }
    }

    /// Add a single value
    pub fn push(&mut self, value: T) {
        self.sum += value.to_f64().unwrap_or(f64::NAN);
        self.count += 1;

        match self.lower.peek() {
            Some(&max_lower) if value > max_lower => self.upper.push(Reverse(value)),
            _ => self.lower.push(value),
        }

        // Rebalance, so that `lower.len() - upper.len()` is either 0 or 1
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(moved) = self.lower.pop() {
                self.upper.push(Reverse(moved));
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(Reverse(moved)) = self.upper.pop() {
                self.lower.push(moved);
            }
        }

        let occurrences = self.histogram.entry(value).or_insert(0);
        *occurrences += 1;
        if self.mode.is_none_or(|(_, best)| *occurrences > best) {
            self.mode = Some((value, *occurrences));
        }
    }

    /// Number of values pushed
    pub fn count(&self) -> usize {
        self.count
    }

    /// The arithmetic mean, 0 if nothing was pushed
    pub fn mean(&self) -> f64 {
        mean_of(self.sum, self.count)
    }

    /// The median, averaging the two middle values for an even count
    pub fn median(&self) -> Option<f64> {
        let lower = self.lower.peek()?.to_f64()?;

        if self.lower.len() > self.upper.len() {
            Some(lower)
        } else {
            let Reverse(upper) = self.upper.peek()?;
            Some((lower + upper.to_f64()?) / 2.0)
        }
    }

    /// The most frequent value with its number of occurrences
    pub fn mode(&self) -> Option<(T, usize)> {
        self.mode
    }

    /// Mean, median and mode at once, `None` if nothing was pushed
    pub fn summary(&self) -> Option<Summary<T>> {
        Some(Summary {
            count: self.count,
            mean: self.mean(),
            median: self.median()?,
            mode: self.mode?,
        })
    }
}

impl<T: Copy + Ord + Hash + ToPrimitive> Extend<T> for OnlineStats<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Copy + Ord + Hash + ToPrimitive> FromIterator<T> for OnlineStats<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// The result of [`pearson`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    /// Pearson's correlation coefficient in `-1.0..=1.0`
    pub correlation: f64,
    /// The population covariance
    pub covariance: f64,
}

/// Pearson's correlation coefficient of `xs` and `ys`, mapped to numbers by `fx` and `fy`.
///
/// The sequences are consumed pairwise and the longer one is truncated. Population moments are
/// used (dividing by the pair count). An empty input or a constant sequence yields NaN.
/// The moments are centered while accumulating, so a large common offset costs no precision.
pub fn pearson<X, Y>(
    xs: impl IntoIterator<Item = X>,
    ys: impl IntoIterator<Item = Y>,
    mut fx: impl FnMut(&X) -> f64,
    mut fy: impl FnMut(&Y) -> f64,
) -> Correlation {
    // Running means and centered moments, updated per pair (Welford)
    let mut count = 0.0;
    let (mut mean_x, mut mean_y) = (0.0, 0.0);
    let (mut moment_xx, mut moment_yy, mut moment_xy) = (0.0, 0.0, 0.0);

    for (x, y) in xs.into_iter().zip(ys) {
        let (x, y) = (fx(&x), fy(&y));
        count += 1.0;

        let delta_x = x - mean_x;
        let delta_y = y - mean_y;
        mean_x += delta_x / count;
        mean_y += delta_y / count;

        moment_xx += delta_x * (x - mean_x);
        moment_yy += delta_y * (y - mean_y);
        moment_xy += delta_x * (y - mean_y);
    }

    let std_dev_x = (moment_xx / count).sqrt();
    let std_dev_y = (moment_yy / count).sqrt();
    let covariance = moment_xy / count;

    Correlation {
        correlation: covariance / (std_dev_x * std_dev_y),
        covariance,
    }
}
