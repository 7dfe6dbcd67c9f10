//! # Simulation Crate
//!
//! The `sim` crate measures the longest repeated substring (K) of DNA
//! sequences and simulates its distribution for random sequences.
//! It includes modules for sentinel-terminated sequences, the suffix-trie
//! engine that computes K, a weighted random-sequence generator, the trial
//! driver, and reading sequences from files.

pub mod base;
pub mod errors;
pub mod prelude;
pub mod simulation;
pub mod source;
pub mod trie;

pub use base::{Nucleotide, Sequence, Symbol};
pub use errors::{Error, Result};
pub use trie::{compute_longest_repeat, SuffixTrie};
