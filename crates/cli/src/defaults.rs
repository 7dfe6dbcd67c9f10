//! Shared default values for simulation configuration.
//! Used when neither a flag nor a `--config` file supplies a value.

pub const LENGTH: usize = 1000;
pub const TRIALS: usize = 100;
