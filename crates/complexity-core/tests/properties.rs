//! Cross-engine properties over generated inputs

use complexity_core::{
    binary_search, insertion_sort, merge_sort, solve_n_queens, Board, Counter, Operation, SortAlgorithm,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-50..50)).collect()
}

fn is_ascending<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn sorts_produce_sorted_permutations(input in prop::collection::vec(any::<i64>(), 0..256)) {
        let mut expected = input.clone();
        expected.sort();

        for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
            let sorted = algorithm.sort(input.clone(), &mut Counter::new());
            prop_assert!(is_ascending(&sorted), "{} len={}", algorithm, input.len());
            prop_assert_eq!(&sorted, &expected, "{} must keep the multiset", algorithm);
        }
    }

    #[test]
    fn sorting_is_idempotent(input in prop::collection::vec(-1000i32..1000, 0..256)) {
        for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
            let once = algorithm.sort(input.clone(), &mut Counter::new());
            let mut counter = Counter::new();
            let twice = algorithm.sort(once.clone(), &mut counter);
            prop_assert_eq!(&once, &twice);

            // Already sorted input moves nothing
            prop_assert_eq!(counter.get(Operation::Swaps), 0);
        }
    }

    #[test]
    fn duplicates_keep_their_counts(input in prop::collection::vec(0u8..4, 0..128)) {
        for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
            let sorted = algorithm.sort(input.clone(), &mut Counter::new());
            for value in 0u8..4 {
                let before = input.iter().filter(|&&v| v == value).count();
                let after = sorted.iter().filter(|&&v| v == value).count();
                prop_assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn insertion_sort_on_sorted_input_costs_n_minus_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut items = random_vec(&mut rng, 500);
    items.sort();

    let mut counter = Counter::new();
    insertion_sort(&mut items, &mut counter);
    assert_eq!(counter.get(Operation::Comparisons), 499);
    assert_eq!(counter.get(Operation::Swaps), 0);
}

#[test]
fn merge_sort_comparisons_stay_under_n_log_n() {
    let mut rng = StdRng::seed_from_u64(5);
    for len in [16usize, 100, 1000] {
        let mut items = random_vec(&mut rng, len);
        let mut counter = Counter::new();
        merge_sort(&mut items, &mut counter);

        let bound = len as f64 * (len as f64).log2();
        assert!((counter.get(Operation::Comparisons) as f64) <= bound);
        assert_eq!(counter.get(Operation::RecursiveCalls), 2 * len as u64 - 1);
    }
}

#[test]
fn binary_search_finds_every_present_value() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut items = random_vec(&mut rng, 300);
    items.sort();

    for value in -60..60 {
        let mut counter = Counter::new();
        match binary_search(&items, &value, &mut counter) {
            Some(index) => assert_eq!(items[index], value),
            None => assert!(!items.contains(&value), "missed {}", value),
        }
    }
}

#[test]
fn binary_search_charges_two_per_missed_probe() {
    let items: Vec<u32> = (0..1023).map(|i| i * 2 + 1).collect();

    // Every even target is absent, so every probe misses
    for target in (0..2048).step_by(2) {
        let mut counter = Counter::new();
        assert_eq!(binary_search(&items, &target, &mut counter), None);

        let comparisons = counter.get(Operation::Comparisons);
        assert_eq!(comparisons % 2, 0);
        assert!(comparisons / 2 <= 10, "1023 elements need at most 10 probes");
    }
}

#[test]
fn n_queens_solutions_are_valid() {
    for n in 4..=10 {
        let mut counter = Counter::new();
        let board = solve_n_queens(n, &mut counter);

        assert!(board.is_solution(), "n={}\n{}", n, board);
        assert_eq!(board.queen_count(), n);
        assert!(counter.get(Operation::RecursiveCalls) >= n as u64);
        assert!(counter.get(Operation::LoopSteps) >= n as u64);
    }
}

#[test]
fn n_queens_infeasible_sizes_terminate_empty() {
    for n in [2, 3] {
        let mut counter = Counter::new();
        let board = solve_n_queens(n, &mut counter);

        assert!(!board.is_solution());
        assert!(board.queen_count() < n);
        assert_eq!(board, Board::new(n));
        assert!(counter.get(Operation::Backtracks) > 0);
    }
}

#[test]
fn shared_counter_accumulates_across_engines() {
    let mut counter = Counter::new();

    merge_sort(&mut [5, 3, 4, 1, 2], &mut counter);
    binary_search(&[1, 3, 5, 7, 9, 11], &7, &mut counter);
    solve_n_queens(4, &mut counter);

    assert_eq!(counter.get(Operation::Comparisons), 8 + 5 + 61);
    assert_eq!(counter.get(Operation::RecursiveCalls), 9 + 9);
    assert_eq!(counter.get(Operation::Backtracks), 4);
}
