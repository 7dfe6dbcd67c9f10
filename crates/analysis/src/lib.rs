//! # Analysis Crate
//!
//! Summaries built on top of `longrep-sim`: base composition of observed
//! sequences, K frequency tables for simulated trials, and the theoretical
//! lower bound that K is compared against.

pub mod analysis;

pub use analysis::{lower_bound, Composition, KSummary};
