use complexity_core::{Algorithm, Family, Scenario};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid size {size} for {family}: {reason}")]
    InvalidSize {
        family: Family,
        size: usize,
        reason: &'static str,
    },
    #[error("Scenario '{scenario}' does not apply to {family}")]
    ScenarioMismatch { scenario: Scenario, family: Family },
    #[error("{algorithm} cannot run in a {family} analysis")]
    FamilyMismatch { algorithm: Algorithm, family: Family },
    #[error("Nothing to run: {0}")]
    EmptyPlan(&'static str),
}

impl AnalyzerError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
