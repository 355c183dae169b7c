use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

/// Category of elementary operation charged by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Comparisons,
    Swaps,
    RecursiveCalls,
    LoopSteps,
    Backtracks,
}

impl Operation {
    /// Number of categories
    pub const COUNT: usize = 5;

    /// All categories in declaration order
    pub const ALL: [Operation; Operation::COUNT] = [
        Operation::Comparisons,
        Operation::Swaps,
        Operation::RecursiveCalls,
        Operation::LoopSteps,
        Operation::Backtracks,
    ];

    /// Category name as reported by the harness
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Comparisons => "comparisons",
            Operation::Swaps => "swaps",
            Operation::RecursiveCalls => "recursive_calls",
            Operation::LoopSteps => "loop_steps",
            Operation::Backtracks => "backtracks",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Caller-owned tally of operations, shared by `&mut` across a recursive call chain.
///
/// Categories never charged read as zero. Tallies only grow until [`Counter::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Operation, u64>", from = "BTreeMap<Operation, u64>")]
pub struct Counter {
    tallies: [u64; Operation::COUNT],
}

impl Counter {
    /// Create a counter with every category at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge one operation of the given category
    #[inline]
    pub fn charge(&mut self, op: Operation) {
        self.tallies[op.index()] += 1;
    }

    /// Charge `amount` operations of the given category
    #[inline]
    pub fn charge_by(&mut self, op: Operation, amount: u64) {
        self.tallies[op.index()] += amount;
    }

    /// Tally for one category
    pub fn get(&self, op: Operation) -> u64 {
        self.tallies[op.index()]
    }

    /// Sum over all categories
    pub fn total(&self) -> u64 {
        self.tallies.iter().sum()
    }

    /// Whether nothing has been charged
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Zero every category
    pub fn reset(&mut self) {
        self.tallies = [0; Operation::COUNT];
    }

    /// Add another counter's tallies into this one
    pub fn merge(&mut self, other: &Counter) {
        for (mine, theirs) in self.tallies.iter_mut().zip(other.tallies.iter()) {
            *mine += theirs;
        }
    }

    /// Non-zero categories in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Operation, u64)> + '_ {
        Operation::ALL
            .into_iter()
            .map(|op| (op, self.get(op)))
            .filter(|&(_, count)| count > 0)
    }
}

impl Index<Operation> for Counter {
    type Output = u64;

    fn index(&self, op: Operation) -> &u64 {
        &self.tallies[op.index()]
    }
}

impl From<Counter> for BTreeMap<Operation, u64> {
    fn from(counter: Counter) -> Self {
        counter.iter().collect()
    }
}

impl From<BTreeMap<Operation, u64>> for Counter {
    fn from(map: BTreeMap<Operation, u64>) -> Self {
        let mut counter = Counter::new();
        for (op, count) in map {
            counter.charge_by(op, count);
        }
        counter
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no operations");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(op, count)| format!("{}={}", op, count))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
