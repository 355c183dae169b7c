use crate::SortAlgorithm;
use serde::{Deserialize, Serialize};

/// Growth class of an operation count as a function of input size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Factorial,
}

impl Complexity {
    /// Value of the growth function at `n`, for normalizing measured counts
    pub fn growth(&self, n: usize) -> f64 {
        let n = n as f64;
        match self {
            Complexity::Constant => 1.0,
            Complexity::Logarithmic => n.max(2.0).log2(),
            Complexity::Linear => n,
            Complexity::Linearithmic => n * n.max(2.0).log2(),
            Complexity::Quadratic => n * n,
            Complexity::Factorial => (2..=n as u64).map(|k| k as f64).product(),
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Constant => write!(f, "1"),
            Complexity::Logarithmic => write!(f, "log n"),
            Complexity::Linear => write!(f, "n"),
            Complexity::Linearithmic => write!(f, "n log n"),
            Complexity::Quadratic => write!(f, "n²"),
            Complexity::Factorial => write!(f, "n!"),
        }
    }
}

/// Asymptotic notation attached to a growth class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    /// Big O
    Upper,
    /// Big Omega
    Lower,
    /// Big Theta
    Tight,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Upper => write!(f, "O"),
            Bound::Lower => write!(f, "Ω"),
            Bound::Tight => write!(f, "Θ"),
        }
    }
}

/// A theoretical bound such as `O(n²)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexityBound {
    pub bound: Bound,
    pub class: Complexity,
}

impl ComplexityBound {
    pub const fn new(bound: Bound, class: Complexity) -> Self {
        Self { bound, class }
    }
}

impl std::fmt::Display for ComplexityBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.bound, self.class)
    }
}

/// Kind of input an algorithm consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Sorting,
    Searching,
    ConstraintSearch,
}

impl Family {
    /// All families in reporting order
    pub fn all() -> &'static [Family] {
        &[Family::Sorting, Family::Searching, Family::ConstraintSearch]
    }

    /// Algorithms consuming this family's input
    pub fn algorithms(&self) -> &'static [Algorithm] {
        match self {
            Family::Sorting => &[Algorithm::InsertionSort, Algorithm::MergeSort],
            Family::Searching => &[Algorithm::BinarySearch],
            Family::ConstraintSearch => &[Algorithm::NQueens],
        }
    }

    /// Scenarios that generate input for this family
    pub fn scenarios(&self) -> &'static [Scenario] {
        match self {
            Family::Sorting => &[Scenario::Sorted, Scenario::Random, Scenario::Reversed],
            Family::Searching => &[Scenario::Best, Scenario::Worst, Scenario::Random],
            Family::ConstraintSearch => &[Scenario::Random],
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Sorting => write!(f, "Sorting"),
            Family::Searching => write!(f, "Searching"),
            Family::ConstraintSearch => write!(f, "Constraint Search"),
        }
    }
}

/// The instrumented algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    InsertionSort,
    MergeSort,
    BinarySearch,
    NQueens,
}

impl Algorithm {
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::InsertionSort,
            Algorithm::MergeSort,
            Algorithm::BinarySearch,
            Algorithm::NQueens,
        ]
    }

    pub fn family(&self) -> Family {
        match self {
            Algorithm::InsertionSort | Algorithm::MergeSort => Family::Sorting,
            Algorithm::BinarySearch => Family::Searching,
            Algorithm::NQueens => Family::ConstraintSearch,
        }
    }

    /// Sorting engine behind this algorithm, if it is a sort
    pub fn sort_engine(&self) -> Option<SortAlgorithm> {
        match self {
            Algorithm::InsertionSort => Some(SortAlgorithm::Insertion),
            Algorithm::MergeSort => Some(SortAlgorithm::Merge),
            _ => None,
        }
    }

    pub fn worst_case(&self) -> ComplexityBound {
        match self {
            Algorithm::InsertionSort => ComplexityBound::new(Bound::Upper, Complexity::Quadratic),
            Algorithm::MergeSort => ComplexityBound::new(Bound::Tight, Complexity::Linearithmic),
            Algorithm::BinarySearch => ComplexityBound::new(Bound::Upper, Complexity::Logarithmic),
            Algorithm::NQueens => ComplexityBound::new(Bound::Upper, Complexity::Factorial),
        }
    }

    pub fn best_case(&self) -> ComplexityBound {
        match self {
            Algorithm::InsertionSort => ComplexityBound::new(Bound::Lower, Complexity::Linear),
            Algorithm::MergeSort => ComplexityBound::new(Bound::Tight, Complexity::Linearithmic),
            Algorithm::BinarySearch => ComplexityBound::new(Bound::Lower, Complexity::Constant),
            Algorithm::NQueens => ComplexityBound::new(Bound::Upper, Complexity::Factorial),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::InsertionSort => write!(f, "Insertion Sort"),
            Algorithm::MergeSort => write!(f, "Merge Sort"),
            Algorithm::BinarySearch => write!(f, "Binary Search"),
            Algorithm::NQueens => write!(f, "N-Queens"),
        }
    }
}

/// Input-generation policy used to probe best, worst and average behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Ascending input
    Sorted,
    /// Shuffled input, or a uniformly drawn search target
    Random,
    /// Descending input
    Reversed,
    /// Search target sits under the first probe
    Best,
    /// Search target is absent
    Worst,
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Sorted => "sorted",
            Scenario::Random => "random",
            Scenario::Reversed => "reversed",
            Scenario::Best => "best",
            Scenario::Worst => "worst",
        }
    }

    pub fn applies_to(&self, family: Family) -> bool {
        family.scenarios().contains(self)
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::Sorted => write!(f, "Sorted"),
            Scenario::Random => write!(f, "Random"),
            Scenario::Reversed => write!(f, "Reversed"),
            Scenario::Best => write!(f, "Best"),
            Scenario::Worst => write!(f, "Worst"),
        }
    }
}

/// Unrecognized scenario name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScenarioError(pub String);

impl std::fmt::Display for ParseScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown scenario '{}' (expected sorted, random, reversed, best or worst)",
            self.0
        )
    }
}

impl std::error::Error for ParseScenarioError {}

impl std::str::FromStr for Scenario {
    type Err = ParseScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" | "ascending" => Ok(Scenario::Sorted),
            "random" | "average" => Ok(Scenario::Random),
            "reversed" | "descending" | "inverted" => Ok(Scenario::Reversed),
            "best" => Ok(Scenario::Best),
            "worst" => Ok(Scenario::Worst),
            _ => Err(ParseScenarioError(s.to_string())),
        }
    }
}
