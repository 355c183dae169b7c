//! Binary search over an ascending slice.

use crate::{Counter, Operation};

/// Find `target` in `items`, returning its index or `None` when it is absent.
///
/// `items` must already be sorted ascending. This is not checked: on unsorted
/// input the search still terminates, but the answer is unspecified.
///
/// Every probe charges one comparison for the equality test, and a probe that
/// misses charges a second one for the ordering test. Two comparisons per
/// non-terminating iteration is the counting convention, not the minimum a
/// search could get away with.
pub fn binary_search<T: PartialOrd>(items: &[T], target: &T, counter: &mut Counter) -> Option<usize> {
    // Closed interval [lo, hi - 1]; hi is kept one past so it never underflows
    let mut lo = 0;
    let mut hi = items.len();

    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;

        counter.charge(Operation::Comparisons);
        if items[mid] == *target {
            return Some(mid);
        }

        counter.charge(Operation::Comparisons);
        if items[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    None
}
