//! Random sequence generation and the trial loop.
//!
//! Re-exports
//!
//! - `BaseDistribution`: ordered base weights used by the generator.
//! - `generate`: draw a sentinel-terminated random sequence.
//! - `run_trials`: the bare driver, one K value per trial.
//! - `Simulation`/`SimulationBuilder`: configured driver with its own RNG,
//!   optional parallelism and length sweeps.

pub mod builder;
pub mod configs;
pub mod distribution;
pub mod engine;
pub mod generator;

pub use builder::SimulationBuilder;
pub use configs::{SimulationConfig, TrialSet};
pub use distribution::{BaseDistribution, DISTRIBUTION_TOLERANCE};
pub use engine::{run_trial, run_trials, run_trials_parallel, Simulation};
pub use generator::generate;
