use crate::config::AnalysisConfig;
use crate::error::{AnalyzerError, Result};
use crate::generator::InputGenerator;
use complexity_core::{binary_search, solve_n_queens, Algorithm, Counter, Family, Scenario};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// What one algorithm call produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Sort output came back ascending
    Sorted,
    Unsorted,
    Found { index: usize },
    NotFound,
    /// Board holds a complete placement
    Solved,
    Unsolved,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Sorted => write!(f, "sorted"),
            Outcome::Unsorted => write!(f, "unsorted"),
            Outcome::Found { index } => write!(f, "found at {}", index),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::Solved => write!(f, "solved"),
            Outcome::Unsolved => write!(f, "no solution"),
        }
    }
}

/// Record of one (algorithm, scenario, size) run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub scenario: Scenario,
    pub size: usize,
    /// Mean wall-clock time of the timed repetitions
    pub avg_time_secs: f64,
    /// Sum over all operation categories
    pub operations: u64,
    pub counts: Counter,
    /// Result of the untimed run the counts come from
    pub outcome: Outcome,
}

impl Measurement {
    /// Measured operations over the worst-case growth function at this size
    pub fn growth_ratio(&self) -> f64 {
        let growth = self.algorithm.worst_case().class.growth(self.size);
        if growth > 0.0 {
            self.operations as f64 / growth
        } else {
            0.0
        }
    }
}

/// Runs registered algorithms over every configured scenario and size
pub struct Analyzer {
    config: AnalysisConfig,
    algorithms: Vec<Algorithm>,
    generator: InputGenerator,
    measurements: Vec<Measurement>,
}

impl Analyzer {
    /// Create an analyzer with no algorithms registered
    pub fn new(config: AnalysisConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => InputGenerator::with_seed(seed),
            None => InputGenerator::new(),
        };
        Self {
            config,
            algorithms: Vec::new(),
            generator,
            measurements: Vec::new(),
        }
    }

    /// Create an analyzer with every algorithm of the configured family registered
    pub fn for_family(config: AnalysisConfig) -> Result<Self> {
        let family = config.family;
        let mut analyzer = Self::new(config);
        for &algorithm in family.algorithms() {
            analyzer.register(algorithm)?;
        }
        Ok(analyzer)
    }

    /// Add an algorithm to the run; it must consume the configured family's input
    pub fn register(&mut self, algorithm: Algorithm) -> Result<()> {
        if algorithm.family() != self.config.family {
            return Err(AnalyzerError::FamilyMismatch {
                algorithm,
                family: self.config.family,
            });
        }
        if !self.algorithms.contains(&algorithm) {
            info!(
                %algorithm,
                worst = %algorithm.worst_case(),
                best = %algorithm.best_case(),
                "registered algorithm"
            );
            self.algorithms.push(algorithm);
        }
        Ok(())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Records of the last run
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Measure every scenario x algorithm x size cell, replacing earlier results
    pub fn run(&mut self) -> Result<&[Measurement]> {
        self.config.validate()?;
        if self.algorithms.is_empty() {
            return Err(AnalyzerError::EmptyPlan("no algorithms registered"));
        }

        self.measurements.clear();
        let scenarios = self.config.scenarios.clone();
        let sizes = self.config.sizes.clone();
        let algorithms = self.algorithms.clone();

        info!(family = %self.config.family, ?scenarios, "starting analysis");
        for &scenario in &scenarios {
            info!(%scenario, "processing scenario");
            for &algorithm in &algorithms {
                for &size in &sizes {
                    let measurement = self.measure(algorithm, scenario, size)?;
                    debug!(
                        %algorithm,
                        %scenario,
                        size,
                        avg_time_secs = measurement.avg_time_secs,
                        counts = %measurement.counts,
                        outcome = %measurement.outcome,
                        "measured"
                    );
                    self.measurements.push(measurement);
                }
            }
        }
        info!(records = self.measurements.len(), "analysis complete");

        Ok(&self.measurements)
    }

    fn measure(&mut self, algorithm: Algorithm, scenario: Scenario, size: usize) -> Result<Measurement> {
        let mut counter = Counter::new();

        let mut elapsed = Duration::ZERO;
        for _ in 0..self.config.repetitions {
            elapsed += self.execute(algorithm, scenario, size, &mut counter)?.0;
        }
        let avg_time_secs = elapsed.as_secs_f64() / self.config.repetitions as f64;

        // One more pass, untimed, leaves the reported tallies in the counter
        let (_, outcome) = self.execute(algorithm, scenario, size, &mut counter)?;

        Ok(Measurement {
            algorithm,
            scenario,
            size,
            avg_time_secs,
            operations: counter.total(),
            counts: counter,
            outcome,
        })
    }

    /// Generate fresh input, reset the counter, and time one call.
    ///
    /// Only the algorithm call sits inside the timed window; judging the
    /// result and logging happen after it.
    fn execute(
        &mut self,
        algorithm: Algorithm,
        scenario: Scenario,
        size: usize,
        counter: &mut Counter,
    ) -> Result<(Duration, Outcome)> {
        let (elapsed, outcome) = match algorithm.family() {
            Family::Sorting => {
                let engine = algorithm.sort_engine().ok_or(AnalyzerError::FamilyMismatch {
                    algorithm,
                    family: Family::Sorting,
                })?;
                let input = self.generator.sort_input(size, scenario)?;
                counter.reset();
                let start = Instant::now();
                let sorted = black_box(engine.sort(input, counter));
                let elapsed = start.elapsed();

                let outcome = if sorted.windows(2).all(|w| w[0] <= w[1]) {
                    Outcome::Sorted
                } else {
                    Outcome::Unsorted
                };
                (elapsed, outcome)
            }
            Family::Searching => {
                let (items, target) = self.generator.search_input(size, scenario)?;
                counter.reset();
                let start = Instant::now();
                let found = black_box(binary_search(&items, &target, counter));
                let elapsed = start.elapsed();

                let outcome = match found {
                    Some(index) => Outcome::Found { index },
                    None => Outcome::NotFound,
                };
                (elapsed, outcome)
            }
            Family::ConstraintSearch => {
                let n = self.generator.queens_input(size, scenario)?;
                counter.reset();
                let start = Instant::now();
                let board = black_box(solve_n_queens(n, counter));
                let elapsed = start.elapsed();

                let outcome = if board.is_solution() {
                    Outcome::Solved
                } else {
                    Outcome::Unsolved
                };
                (elapsed, outcome)
            }
        };

        trace!(%algorithm, %scenario, size, %outcome, %counter, "call finished");
        Ok((elapsed, outcome))
    }
}
