//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation.

use crate::base::Nucleotide;
use crate::errors::{Error, Result};
use crate::simulation::{BaseDistribution, Simulation, SimulationConfig};

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use longrep_sim::simulation::SimulationBuilder;
///
/// let mut sim = SimulationBuilder::new()
///     .length(1000)
///     .trials(20)
///     .seed(42)
///     .build()
///     .unwrap();
/// let set = sim.run().unwrap();
/// assert_eq!(set.values.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    length: Option<usize>,
    trials: Option<usize>,

    // Optional parameters (with defaults)
    distribution: BaseDistribution, // Default: reference ratios
    weights: Option<Vec<(Nucleotide, f64)>>, // Validated in build()
    seed: Option<u64>,              // Default: None (random)
    parallel: bool,                 // Default: true
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            length: None,
            trials: None,
            distribution: BaseDistribution::reference(),
            weights: None,
            seed: None,
            parallel: true,
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self {
            length: Some(config.length),
            trials: Some(config.trials),
            distribution: config.distribution,
            weights: None,
            seed: config.seed,
            parallel: config.parallel,
        }
    }

    /// Set the number of random bases per trial (required).
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the number of trials (required).
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Use an already validated distribution.
    pub fn distribution(mut self, distribution: BaseDistribution) -> Self {
        self.distribution = distribution;
        self.weights = None;
        self
    }

    /// Use raw `(base, weight)` pairs; they are validated by `build`.
    pub fn weights(mut self, weights: Vec<(Nucleotide, f64)>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run trials on the rayon pool (default) or on the calling thread.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the parameters and produce the configuration.
    pub fn build_config(self) -> Result<SimulationConfig> {
        let length = self
            .length
            .ok_or_else(|| Error::InvalidParameter("length is required".to_string()))?;
        let trials = self
            .trials
            .ok_or_else(|| Error::InvalidParameter("trials is required".to_string()))?;
        let distribution = match self.weights {
            Some(weights) => BaseDistribution::new(weights)?,
            None => self.distribution,
        };

        Ok(SimulationConfig {
            length,
            trials,
            distribution,
            seed: self.seed,
            parallel: self.parallel,
        })
    }

    pub fn build(self) -> Result<Simulation> {
        self.build_config().map(Simulation::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SimulationBuilder::new().length(10).trials(2).build_config().unwrap();
        assert_eq!(config.distribution, BaseDistribution::reference());
        assert_eq!(config.seed, None);
        assert!(config.parallel);
    }

    #[test]
    fn test_builder_missing_required() {
        let err = SimulationBuilder::new().trials(2).build().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(ref m) if m.contains("length")));

        let err = SimulationBuilder::new().length(2).build().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(ref m) if m.contains("trials")));
    }

    #[test]
    fn test_builder_validates_weights() {
        let err = SimulationBuilder::new()
            .length(10)
            .trials(1)
            .weights(vec![(Nucleotide::A, 0.6), (Nucleotide::C, 0.6)])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDistribution(_)));
    }

    #[test]
    fn test_builder_from_config_roundtrip() {
        let config = SimulationConfig::new(77, 4, BaseDistribution::uniform(), Some(1));
        let rebuilt = SimulationBuilder::from_config(config.clone())
            .build_config()
            .unwrap();
        assert_eq!(rebuilt, config);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SimulationBuilder::from_config(SimulationConfig::new(
            77,
            4,
            BaseDistribution::uniform(),
            None,
        ))
        .length(5)
        .seed(3)
        .parallel(false)
        .distribution(BaseDistribution::reference())
        .build_config()
        .unwrap();
        assert_eq!(config.length, 5);
        assert_eq!(config.seed, Some(3));
        assert!(!config.parallel);
        assert_eq!(config.distribution, BaseDistribution::reference());
    }
}
