//! Classic algorithms instrumented to count the elementary operations they perform.
//!
//! Each engine takes its problem input plus a caller-owned [`Counter`] and
//! charges every comparison, swap, recursive call, loop step and backtrack
//! that matters for its complexity analysis. Recursive engines thread the
//! same `&mut Counter` through every frame, so the caller reads a single
//! total once the call returns.
//!
//! ```
//! use complexity_core::{merge_sort, Counter, Operation};
//!
//! let mut items = vec![5, 3, 4, 1, 2];
//! let mut counter = Counter::new();
//! merge_sort(&mut items, &mut counter);
//!
//! assert_eq!(items, vec![1, 2, 3, 4, 5]);
//! assert_eq!(counter.get(Operation::RecursiveCalls), 9);
//! assert_eq!(counter.get(Operation::Comparisons), 8);
//! ```

mod catalog;
mod counter;
pub mod queens;
pub mod search;
pub mod sorting;

pub use catalog::{Algorithm, Bound, Complexity, ComplexityBound, Family, ParseScenarioError, Scenario};
pub use counter::{Counter, Operation};
pub use queens::{solve_n_queens, Board, Position};
pub use search::binary_search;
pub use sorting::{insertion_sort, merge_sort, SortAlgorithm};
