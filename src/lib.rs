//! In place sorting algorithms, quickselect and a few streaming statistics.
//!
//! Every sort works on a `&mut [T]` with a comparator `FnMut(&T, &T) -> Ordering`, see
//! [`algorithms::Sort`]. The copy based merge sort additionally takes a scratch buffer of the
//! same length, see [`algorithms::BufferedSort`].

pub mod algorithms;
pub mod data;
pub mod error;
pub mod stats;

#[cfg(test)]
mod test;

pub use error::{GapSequenceError, SortError};
