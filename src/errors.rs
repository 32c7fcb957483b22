//! Errors raised while assembling a puzzle session.
//!
//! The search itself never fails: an invalid word length is answered with an
//! empty result. Everything here belongs to the collaborators that read word
//! lists, grids, and configuration from the outside world.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("could not read word list {path}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read grid {path}: {source}")]
    GridRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("grid contains no cells")]
    EmptyGrid,

    #[error("grid row {row} has {found} cells but row 0 has {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid grid cell \"{token}\" at row {row}, column {col} (expected a single letter or '-')")]
    InvalidGridCell {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("invalid word length \"{input}\"")]
    InvalidWordLength { input: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("could not read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("could not format results: {0}")]
    OutputFormat(#[source] serde_json::Error),

    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SolverError {
    /// short stable identifier, printed by the CLI next to the message
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::DictionaryRead { .. } => "E001",
            SolverError::GridRead { .. } => "E002",
            SolverError::EmptyGrid => "E003",
            SolverError::RaggedGrid { .. } => "E004",
            SolverError::InvalidGridCell { .. } => "E005",
            SolverError::InvalidWordLength { .. } => "E006",
            SolverError::InvalidConfig { .. } => "E007",
            SolverError::ConfigRead { .. } => "E008",
            SolverError::ConfigParse(_) => "E009",
            SolverError::OutputFormat(_) => "E010",
            SolverError::ThreadPool(_) => "E011",
        }
    }
}
