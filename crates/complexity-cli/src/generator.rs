use crate::error::{AnalyzerError, Result};
use complexity_core::{Family, Scenario};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Worst-case search target; generated values are never negative
pub const MISSING_TARGET: i64 = -1;

/// Scenario-driven input generator
pub struct InputGenerator {
    rng: StdRng,
}

impl Default for InputGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputGenerator {
    /// Create a generator seeded from entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A permutation of `0..size` arranged for the scenario
    pub fn sort_input(&mut self, size: usize, scenario: Scenario) -> Result<Vec<i64>> {
        let values = 0..size as i64;
        match scenario {
            Scenario::Sorted => Ok(values.collect()),
            Scenario::Reversed => Ok(values.rev().collect()),
            Scenario::Random => {
                let mut items: Vec<i64> = values.collect();
                items.shuffle(&mut self.rng);
                Ok(items)
            }
            other => Err(AnalyzerError::ScenarioMismatch {
                scenario: other,
                family: Family::Sorting,
            }),
        }
    }

    /// `size` sorted values drawn from `0..size * 10`, plus a target.
    ///
    /// Best puts the target under the first probe, worst picks a value that is
    /// absent, random draws it uniformly from the value range.
    pub fn search_input(&mut self, size: usize, scenario: Scenario) -> Result<(Vec<i64>, i64)> {
        if !scenario.applies_to(Family::Searching) {
            return Err(AnalyzerError::ScenarioMismatch {
                scenario,
                family: Family::Searching,
            });
        }

        let upper = size as i64 * 10;
        let mut items: Vec<i64> = (0..size).map(|_| self.rng.gen_range(0..upper)).collect();
        items.sort_unstable();

        let target = match scenario {
            Scenario::Best => items
                .get(size.saturating_sub(1) / 2)
                .copied()
                .unwrap_or(MISSING_TARGET),
            Scenario::Random => self.rng.gen_range(0..=upper),
            _ => MISSING_TARGET,
        };

        Ok((items, target))
    }

    /// Board dimension for N-Queens; only the random scenario applies
    pub fn queens_input(&mut self, size: usize, scenario: Scenario) -> Result<usize> {
        if !scenario.applies_to(Family::ConstraintSearch) {
            return Err(AnalyzerError::ScenarioMismatch {
                scenario,
                family: Family::ConstraintSearch,
            });
        }
        Ok(size)
    }
}
