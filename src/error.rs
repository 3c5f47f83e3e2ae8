//! Errors reported by the fallible sorting, selection and statistics entry points

/// Why a gap sequence was rejected by [`crate::algorithms::shellsort::validate_gaps`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GapSequenceError {
    #[error("gap sequence is empty")]
    Empty,
    #[error("gap at position {position} is zero")]
    Zero { position: usize },
    #[error("gap {gap} at position {position} does not decrease")]
    NotDecreasing { position: usize, gap: usize },
    #[error("gap sequence ends in {last} instead of 1")]
    DoesNotEndInOne { last: usize },
}

/// The error type of this crate
///
/// Every variant is reported synchronously at the call that detected it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// An index parameter lies outside `0..len`
    #[error("index {index} is out of range for a slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The inclusive range `left..=right` is reversed
    #[error("invalid range {left}..={right}")]
    InvalidRange { left: usize, right: usize },
    /// The requested order statistic lies outside the selected range
    #[error("order statistic {k} lies outside {left}..={right}")]
    OrderStatisticOutOfRange { k: usize, left: usize, right: usize },
    /// Source and scratch buffer of a copy based merge sort differ in length
    #[error("buffer of length {target_len} does not match source of length {source_len}")]
    BufferLengthMismatch { source_len: usize, target_len: usize },
    /// A shell sort gap sequence was rejected
    #[error("invalid gap sequence: {0}")]
    InvalidGapSequence(#[from] GapSequenceError),
    /// An algorithm variant tag could not be parsed
    #[error("unsupported mode `{0}`")]
    UnsupportedMode(String),
}
