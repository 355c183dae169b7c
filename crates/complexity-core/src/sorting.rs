//! Comparison sorts that charge their work to a [`Counter`].

use crate::{Counter, Operation};
use serde::{Deserialize, Serialize};

/// Which sorting engine to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Insertion,
    Merge,
}

impl SortAlgorithm {
    /// Sort `items` ascending and hand them back
    pub fn sort<T: PartialOrd + Clone>(self, mut items: Vec<T>, counter: &mut Counter) -> Vec<T> {
        match self {
            SortAlgorithm::Insertion => insertion_sort(&mut items, counter),
            SortAlgorithm::Merge => merge_sort(&mut items, counter),
        }
        items
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortAlgorithm::Insertion => write!(f, "Insertion Sort"),
            SortAlgorithm::Merge => write!(f, "Merge Sort"),
        }
    }
}

/// Sort in place by insertion.
///
/// Each outer step charges one comparison up front, then one comparison and one
/// swap for every larger element the key moves past. Dropping the key into its
/// gap is free, so ascending input costs exactly `n - 1` comparisons and no swaps.
pub fn insertion_sort<T: PartialOrd>(items: &mut [T], counter: &mut Counter) {
    for i in 1..items.len() {
        counter.charge(Operation::Comparisons);

        // The key rides down with each shift; items[j] always holds it
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            counter.charge(Operation::Comparisons);
            items.swap(j - 1, j);
            counter.charge(Operation::Swaps);
            j -= 1;
        }
    }
}

/// Top-down merge sort in place.
///
/// Every invocation, the outermost included, charges one recursive call. Each
/// merge step that has a head on both sides charges one comparison; ties take
/// the left head, so the sort is stable.
pub fn merge_sort<T: PartialOrd + Clone>(items: &mut [T], counter: &mut Counter) {
    sort_halves(items, counter);
}

fn sort_halves<T: PartialOrd + Clone>(items: &mut [T], counter: &mut Counter) {
    counter.charge(Operation::RecursiveCalls);
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    let mut left = items[..mid].to_vec();
    let mut right = items[mid..].to_vec();

    sort_halves(&mut left, counter);
    sort_halves(&mut right, counter);

    merge(&left, &right, items, counter);
}

fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T], out: &mut [T], counter: &mut Counter) {
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        counter.charge(Operation::Comparisons);
        if left[i] <= right[j] {
            out[k] = left[i].clone();
            i += 1;
        } else {
            out[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    // At most one side still has elements
    let rest = if i < left.len() { &left[i..] } else { &right[j..] };
    out[k..].clone_from_slice(rest);
}
