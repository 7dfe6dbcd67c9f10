//! Simulation configuration and results.
//!
//! Both types serialise with serde so a run can be described in, and its
//! results written to, JSON.

use super::BaseDistribution;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_parallel() -> bool {
    true
}

/// Everything needed to reproduce a set of trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of random bases per trial (the sentinel is extra)
    pub length: usize,
    /// Number of generate-then-measure trials
    pub trials: usize,
    /// Base weights, in draw order
    #[serde(default)]
    pub distribution: BaseDistribution,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
    /// Run trials on the rayon pool; results are identical either way
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl SimulationConfig {
    pub fn new(
        length: usize,
        trials: usize,
        distribution: BaseDistribution,
        seed: Option<u64>,
    ) -> Self {
        Self {
            length,
            trials,
            distribution,
            seed,
            parallel: default_parallel(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// The K values of one batch of trials, in trial order.
///
/// Each value is the measured longest repeat plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialSet {
    pub length: usize,
    pub values: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_config_from_json_defaults() {
        let config = SimulationConfig::from_json(r#"{"length": 100, "trials": 5}"#).unwrap();
        assert_eq!(config.length, 100);
        assert_eq!(config.trials, 5);
        assert_eq!(config.distribution, BaseDistribution::reference());
        assert_eq!(config.seed, None);
        assert!(config.parallel);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = SimulationConfig::new(50, 3, BaseDistribution::uniform(), Some(9));
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(SimulationConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_invalid_distribution() {
        let json = r#"{"length": 10, "trials": 1, "distribution": [["A", 0.9]]}"#;
        assert!(matches!(SimulationConfig::from_json(json), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_missing_file() {
        let err = SimulationConfig::from_json_file("/nonexistent/longrep.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
