//! Summary statistics of simulated K values.

use super::bound::lower_bound;
use super::utils::{mean, std_dev};
use longrep_sim::simulation::{BaseDistribution, TrialSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distribution of K over one batch of trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KSummary {
    pub length: usize,
    pub trials: usize,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub mean: f64,
    pub std_dev: f64,
    /// `(K, number of trials)` in increasing K
    pub histogram: Vec<(usize, usize)>,
    /// Asymptotic lower bound on K - 1 for this length and distribution
    pub lower_bound: Option<f64>,
}

impl KSummary {
    pub fn new(set: &TrialSet, distribution: &BaseDistribution) -> Self {
        let mut summary = Self::from_values(set.length, &set.values);
        summary.lower_bound = lower_bound(set.length, distribution);
        summary
    }

    /// Summarise raw K values without a bound.
    pub fn from_values(length: usize, values: &[usize]) -> Self {
        let as_f64: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        Self {
            length,
            trials: values.len(),
            min: values.iter().copied().min(),
            max: values.iter().copied().max(),
            mean: mean(&as_f64),
            std_dev: std_dev(&as_f64),
            histogram: histogram(values),
            lower_bound: None,
        }
    }

    /// Most frequent K; ties go to the smallest.
    pub fn mode(&self) -> Option<usize> {
        self.histogram
            .iter()
            .fold(None, |best: Option<(usize, usize)>, &(k, n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((k, n)),
            })
            .map(|(k, _)| k)
    }
}

/// Frequency table of `values`, sorted by value.
pub fn histogram(values: &[usize]) -> Vec<(usize, usize)> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_default() += 1;
    }
    counts.into_iter().collect()
}
