use crate::errors::SolverError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// largest region searched directly instead of being split
pub const DEFAULT_MAX_LEAF_AREA: usize = 16;

/// largest cells-per-letter ratio at which a region is searched directly
pub const DEFAULT_MAX_AREA_PER_LETTER: f64 = 1.5;

/// decides when a region is small enough to scan rather than split. the
/// thresholds only trade scheduling overhead against scan cost; any values
/// give the same words.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitPolicy {
    pub max_leaf_area: usize,
    pub max_area_per_letter: f64,
}

impl SplitPolicy {
    /// treat any region as a leaf, i.e. one task scans the whole grid
    pub fn never_split() -> Self {
        Self {
            max_leaf_area: usize::MAX,
            max_area_per_letter: f64::INFINITY,
        }
    }

    /// split all the way down to single cells
    pub fn always_split() -> Self {
        Self {
            max_leaf_area: 0,
            max_area_per_letter: 0.0,
        }
    }

    pub fn is_leaf(&self, area: usize, word_length: usize) -> bool {
        let area_per_letter = if word_length == 0 {
            f64::INFINITY
        } else {
            area as f64 / word_length as f64
        };
        area <= self.max_leaf_area && area_per_letter <= self.max_area_per_letter
    }
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self {
            max_leaf_area: DEFAULT_MAX_LEAF_AREA,
            max_area_per_letter: DEFAULT_MAX_AREA_PER_LETTER,
        }
    }
}

/// how the two halves of a split region are computed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    /// fork both halves onto the worker pool and join
    #[default]
    Parallel,
    /// compute the halves one after the other on the current thread
    Sequential,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub split_policy: SplitPolicy,
    pub execution: Execution,
    /// stop extending a path once no dictionary word starts with it
    pub prune_prefixes: bool,
    /// worker pool size. `None` uses the available parallelism.
    pub num_threads: Option<usize>,
    /// how many word-length requests of one session run at once. `None` runs
    /// them all at once, up to the available parallelism.
    pub request_workers: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            split_policy: SplitPolicy::default(),
            execution: Execution::default(),
            prune_prefixes: true,
            num_threads: None,
            request_workers: None,
        }
    }
}

impl SearchConfig {
    /// read a JSON configuration. missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| SolverError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if self.split_policy.max_area_per_letter.is_nan()
            || self.split_policy.max_area_per_letter < 0.0
        {
            return Err(SolverError::InvalidConfig {
                reason: format!(
                    "max_area_per_letter must be a non-negative number, not {}",
                    self.split_policy.max_area_per_letter
                ),
            });
        }
        if self.num_threads == Some(0) {
            return Err(SolverError::InvalidConfig {
                reason: "num_threads must be at least 1".to_string(),
            });
        }
        if self.request_workers == Some(0) {
            return Err(SolverError::InvalidConfig {
                reason: "request_workers must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
