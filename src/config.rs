//! Configuration for graph expansion and planning.
//!
//! Both structs deserialize from JSON with every field optional; missing
//! fields take their [`Default`] values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for [`crate::graph::BreedGraph::expand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Worker threads computing candidates. `None` uses the hardware parallelism.
    pub workers: Option<usize>,
    /// Completed batches that may wait in each worker's queue before it blocks.
    /// Zero makes every hand-off a rendezvous.
    pub queue_depth: usize,
    /// Maximum candidates per batch sent to the aggregator.
    pub batch_size: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            workers: None,
            queue_depth: 16,
            batch_size: 1024,
        }
    }
}

impl ExpandConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for zero workers or a zero batch size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::Invalid("workers must be at least 1".to_string()));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration for [`crate::planner::plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Number of expansion steps.
    pub generations: usize,
    /// Largest phenotype subset to build a test for. `None` builds a test for
    /// every proper subset.
    pub max_test_size: Option<usize>,
    /// On the last step, only materialize vertices that satisfy the target.
    pub prune_final_generation: bool,
    /// Expansion settings.
    pub expand: ExpandConfig,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            generations: 3,
            max_test_size: None,
            prune_final_generation: true,
            expand: ExpandConfig::default(),
        }
    }
}

impl PlanConfig {
    /// Parse a JSON configuration and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the expansion settings are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.expand.validate()
    }
}
