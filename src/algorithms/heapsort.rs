//! The heapsort implementations
//!
//! The heap lives in a prefix of the slice, the children of `i` are `2 * i + 1` and `2 * i + 2`.
//! It respects the invariant `parent >= child`.

use std::cmp::Ordering;

/// How the heap is repaired after the root changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapSortType {
    /// Swap the node with its greater child until no child is greater
    #[default]
    BasicDown,
    /// Search the leaf along the greater children first, then climb back up to the
    /// destination of the root. Fewer comparisons on average.
    FloydDown,
}

impl std::fmt::Display for HeapSortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HeapSortType::BasicDown => "basic-down",
            HeapSortType::FloydDown => "floyd-down",
        })
    }
}

impl std::str::FromStr for HeapSortType {
    type Err = crate::SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic-down" => Ok(HeapSortType::BasicDown),
            "floyd-down" => Ok(HeapSortType::FloydDown),
            _ => Err(crate::SortError::UnsupportedMode(s.to_string())),
        }
    }
}

/// The default `FLOYD` parameter for [`HeapSort`]
pub const DEFAULT_FLOYD: bool = false;

/// The heap [`super::Sort`], `FLOYD` selects [`HeapSortType::FloydDown`]
pub struct HeapSort<const FLOYD: bool = DEFAULT_FLOYD>;

impl<const FLOYD: bool> super::Sort for HeapSort<FLOYD> {
    const IS_STABLE: bool = false;

    fn display() -> String {
        format!("heap-{}", Self::MODE)
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: F) {
        heap_sort_by(slice, Self::MODE, compare);
    }
}

impl<const FLOYD: bool> HeapSort<FLOYD> {
    const MODE: HeapSortType = if FLOYD {
        HeapSortType::FloydDown
    } else {
        HeapSortType::BasicDown
    };
}

/// Sort `slice` with heapsort using the given sift down strategy
pub fn heap_sort_by<T, F: FnMut(&T, &T) -> Ordering>(
    slice: &mut [T],
    mode: HeapSortType,
    mut compare: F,
) {
    let sift_down = match mode {
        HeapSortType::BasicDown => sift_down_basic::<T, F>,
        HeapSortType::FloydDown => sift_down_floyd::<T, F>,
    };

    // Build the heap in linear time
    for i in (0..slice.len() / 2).rev() {
        sift_down(slice, i, &mut compare);
    }

    // Pop maximal elements from the heap
    for end in (1..slice.len()).rev() {
        slice.swap(0, end);
        sift_down(&mut slice[..end], 0, &mut compare);
    }
}

#[inline]
fn parent(node: usize) -> usize {
    (node - 1) / 2
}

/// Restore the heap invariant below `node`, `heap` is the whole heap
fn sift_down_basic<T, F: FnMut(&T, &T) -> Ordering>(
    heap: &mut [T],
    mut node: usize,
    compare: &mut F,
) {
    loop {
        let mut child = 2 * node + 1;
        if child >= heap.len() {
            break;
        }

        // Choose the greater child
        if child + 1 < heap.len() && compare(&heap[child], &heap[child + 1]) == Ordering::Less {
            child += 1;
        }

        // Stop if the invariant holds at `node`
        if compare(&heap[node], &heap[child]) != Ordering::Less {
            break;
        }

        heap.swap(node, child);
        node = child;
    }
}

/// Like [`sift_down_basic`] but with Floyd's leaf search
fn sift_down_floyd<T, F: FnMut(&T, &T) -> Ordering>(
    heap: &mut [T],
    node: usize,
    compare: &mut F,
) {
    // Descend to a leaf along the greater children, without looking at `heap[node]`
    let mut leaf = node;
    while 2 * leaf + 2 < heap.len() {
        let left = 2 * leaf + 1;
        leaf = if compare(&heap[left + 1], &heap[left]) == Ordering::Greater {
            left + 1
        } else {
            left
        };
    }
    if 2 * leaf + 1 < heap.len() {
        leaf = 2 * leaf + 1;
    }

    // Climb back up to the first position holding a value not less than the root value
    let mut target = leaf;
    while target > node && compare(&heap[node], &heap[target]) == Ordering::Greater {
        target = parent(target);
    }

    // Rotate the path `node -> target`: everything below `node` moves up one level and the root
    // value lands in `target`. The ancestor of `target` that is `level` levels up is
    // `((target + 1) >> level) - 1`.
    let mut levels = 0;
    let mut current = target;
    while current > node {
        current = parent(current);
        levels += 1;
    }
    for level in (0..levels).rev() {
        let upper = ((target + 1) >> (level + 1)) - 1;
        let lower = ((target + 1) >> level) - 1;
        heap.swap(upper, lower);
    }
}
