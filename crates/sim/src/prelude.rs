//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use longrep_sim::prelude::*;
//!
//! let seq: Sequence = "GATTACA$".parse().unwrap();
//! assert_eq!(compute_longest_repeat(&seq).unwrap(), 1);
//! ```

pub use crate::base::{Nucleotide, Sequence, Symbol};
pub use crate::errors::{self, Error, MalformedSequence};
pub use crate::simulation::{
    generate, run_trials, BaseDistribution, Simulation, SimulationBuilder, SimulationConfig,
    TrialSet,
};
pub use crate::trie::{compute_longest_repeat, SuffixTrie};
