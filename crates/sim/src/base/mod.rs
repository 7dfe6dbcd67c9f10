//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides,
//! sentinel-terminated symbols, and sequences in the longrep library.

mod nucleotide;
mod sequence;
mod symbol;

pub use nucleotide::Nucleotide;
pub use sequence::Sequence;
pub use symbol::{Symbol, SENTINEL_CHAR};
