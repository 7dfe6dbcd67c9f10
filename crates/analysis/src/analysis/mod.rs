//! Analysis tools for longrep
//!
//! This module provides:
//! - Base composition and frequency ratios
//! - Summary statistics and frequency tables of K values
//! - The asymptotic lower bound on K

pub mod bound;
pub mod composition;
pub mod summary;
pub mod utils;

// Re-export commonly used functions
pub use bound::lower_bound;
pub use composition::Composition;
pub use summary::{histogram, KSummary};
