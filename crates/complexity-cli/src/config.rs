use crate::error::{AnalyzerError, Result};
use complexity_core::{Family, Scenario};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one analysis over a single algorithm family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Which algorithms run, and what input they get
    pub family: Family,
    /// Input sizes (board dimension for N-Queens)
    pub sizes: Vec<usize>,
    /// Input-generation scenarios, run in order
    pub scenarios: Vec<Scenario>,
    /// Timed executions averaged per measurement
    pub repetitions: usize,
    /// Seed for reproducible inputs (None = from entropy)
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::sorting()
    }
}

impl AnalysisConfig {
    pub fn sorting() -> Self {
        Self {
            family: Family::Sorting,
            sizes: vec![100, 250, 500, 1000, 2000],
            scenarios: vec![Scenario::Sorted, Scenario::Random, Scenario::Reversed],
            repetitions: 5,
            seed: None,
        }
    }

    pub fn searching() -> Self {
        Self {
            family: Family::Searching,
            sizes: vec![1000, 10_000, 50_000, 100_000, 200_000],
            scenarios: vec![Scenario::Best, Scenario::Worst, Scenario::Random],
            repetitions: 5,
            seed: None,
        }
    }

    pub fn queens() -> Self {
        Self {
            family: Family::ConstraintSearch,
            sizes: (4..=9).collect(),
            scenarios: vec![Scenario::Random],
            repetitions: 5,
            seed: None,
        }
    }

    /// Preset for a family
    pub fn for_family(family: Family) -> Self {
        match family {
            Family::Sorting => Self::sorting(),
            Family::Searching => Self::searching(),
            Family::ConstraintSearch => Self::queens(),
        }
    }

    /// Layer partial settings on top of this configuration
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(sizes) = &overrides.sizes {
            self.sizes = sizes.clone();
        }
        if let Some(scenarios) = &overrides.scenarios {
            self.scenarios = scenarios.clone();
        }
        if let Some(repetitions) = overrides.repetitions {
            self.repetitions = repetitions;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    /// Check the configuration describes a runnable analysis
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(AnalyzerError::EmptyPlan("no input sizes"));
        }
        if self.scenarios.is_empty() {
            return Err(AnalyzerError::EmptyPlan("no scenarios"));
        }
        if self.repetitions == 0 {
            return Err(AnalyzerError::EmptyPlan("repetitions must be at least 1"));
        }

        if let Some(&scenario) = self.scenarios.iter().find(|s| !s.applies_to(self.family)) {
            return Err(AnalyzerError::ScenarioMismatch {
                scenario,
                family: self.family,
            });
        }

        if self.family == Family::Searching && self.sizes.contains(&0) {
            return Err(AnalyzerError::InvalidSize {
                family: self.family,
                size: 0,
                reason: "a search needs at least one element",
            });
        }

        Ok(())
    }
}

/// Partial settings from a profile entry or the command line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub sizes: Option<Vec<usize>>,
    pub scenarios: Option<Vec<Scenario>>,
    pub repetitions: Option<usize>,
    pub seed: Option<u64>,
}

/// One analysis listed in a profile file
#[derive(Debug, Clone, Deserialize)]
struct ProfileEntry {
    family: Family,
    #[serde(flatten)]
    overrides: ConfigOverrides,
}

/// Parse a profile: a JSON array of `{ "family": ..., <overrides> }` entries,
/// each starting from its family preset.
pub fn parse_profile(json: &str) -> Result<Vec<AnalysisConfig>> {
    let entries: Vec<ProfileEntry> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(AnalyzerError::EmptyPlan("profile lists no analyses"));
    }

    Ok(entries
        .into_iter()
        .map(|entry| {
            let mut config = AnalysisConfig::for_family(entry.family);
            config.apply(&entry.overrides);
            config
        })
        .collect())
}

/// Load a profile from disk
pub fn load_profile(path: &Path) -> Result<Vec<AnalysisConfig>> {
    let json = fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
    parse_profile(&json)
}
