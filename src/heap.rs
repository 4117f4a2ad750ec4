//! The ordering engine: binary min-heap algorithms over a borrowed order.
//!
//! The heap lives in the machine's `Vec<T>` with the usual 0-indexed
//! layout: `parent(i) = (i - 1) / 2`, children at `2i + 1` and `2i + 2`.
//! Heap property: `order.compare(&data[parent(i)], &data[i]) != Greater`
//! for every `i > 0`.
//!
//! Every decision in this module is a strict `Less` comparison. Equivalent
//! elements therefore never swap: a comparator that reports every pair equal
//! leaves the buffer untouched, and no input can make the sift loops spin.

use std::cmp::Ordering;

use crate::order::Order;

/// Restructures `data` into a binary min-heap under `order`, in place.
///
/// Floyd's bottom-up construction: sift down every non-leaf node from the
/// midpoint backward. O(n) comparisons and swaps, zero allocations.
pub(crate) fn build<T, O: Order<T>>(data: &mut [T], order: &O) {
    let n = data.len();
    if n < 2 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(data, order, root);
    }
}

/// Restores the heap property for the subtree rooted at `root`, assuming
/// both child subtrees already satisfy it.
///
/// The right child is preferred only when strictly smaller than the left,
/// and a child replaces its parent only when strictly smaller than it.
pub(crate) fn sift_down<T, O: Order<T>>(data: &mut [T], order: &O, mut root: usize) {
    let n = data.len();
    loop {
        let left = 2 * root + 1;
        if left >= n {
            return;
        }

        let mut child = left;
        let right = left + 1;
        if right < n && order.compare(&data[right], &data[left]) == Ordering::Less {
            child = right;
        }

        if order.compare(&data[child], &data[root]) != Ordering::Less {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}

/// Removes and returns a minimum element, or `None` if `data` is empty.
///
/// Standard extract-min: swap the root with the last element, shrink by
/// one, sift the new root down. O(log n).
pub(crate) fn pop<T, O: Order<T>>(data: &mut Vec<T>, order: &O) -> Option<T> {
    if data.is_empty() {
        return None;
    }
    let last = data.len() - 1;
    data.swap(0, last);
    let min = data.pop();
    if !data.is_empty() {
        sift_down(data, order, 0);
    }
    min
}

/// Returns true if `data` satisfies the min-heap inequality at every
/// parent/child pair. Used by debug assertions and tests.
pub(crate) fn is_min_heap<T, O: Order<T>>(data: &[T], order: &O) -> bool {
    (1..data.len()).all(|i| order.compare(&data[(i - 1) / 2], &data[i]) != Ordering::Greater)
}
