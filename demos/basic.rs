//! Basic example of the instrumented algorithms

use complexity_core::{binary_search, solve_n_queens, Algorithm, Counter, SortAlgorithm};

fn main() {
    // Sort the same input with both engines
    let input = vec![5, 3, 4, 1, 2];
    println!("Sorting {:?}\n", input);

    for engine in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
        let mut counter = Counter::new();
        let sorted = engine.sort(input.clone(), &mut counter);
        println!("{}: {:?}", engine, sorted);
        println!("  {}", counter);
    }

    // Search a sorted slice
    println!("\n--- Binary search ---\n");
    let haystack = [1, 3, 5, 7, 9, 11];
    for target in [7, 4] {
        let mut counter = Counter::new();
        match binary_search(&haystack, &target, &mut counter) {
            Some(index) => println!("{} found at index {} ({})", target, index, counter),
            None => println!("{} not found ({})", target, counter),
        }
    }

    // Place queens
    println!("\n--- N-Queens ---\n");
    for n in [3, 8] {
        let mut counter = Counter::new();
        let board = solve_n_queens(n, &mut counter);
        if board.is_solution() {
            println!("{} queens:\n{}", n, board);
        } else {
            println!("No placement exists for {} queens", n);
        }
        println!("  {}\n", counter);
    }

    // Theoretical bounds the harness reports next to the measurements
    for algorithm in Algorithm::all() {
        println!(
            "{:<15} worst {:<11} best {}",
            algorithm.to_string(),
            algorithm.worst_case().to_string(),
            algorithm.best_case()
        );
    }
}
