//! Sequence composition analysis
//!
//! Base counts and frequency ratios of an observed sequence. The ratios are
//! what a simulation should use as its generator weights when the goal is to
//! compare a real sequence's K against random sequences of the same makeup.

use longrep_sim::base::{Nucleotide, Sequence};
use longrep_sim::errors::Result;
use longrep_sim::simulation::BaseDistribution;
use serde::{Deserialize, Serialize};

/// Counts of each base, indexed by `Nucleotide::to_index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    counts: [usize; 4],
}

impl Composition {
    pub fn from_bases<I>(bases: I) -> Self
    where
        I: IntoIterator<Item = Nucleotide>,
    {
        let mut counts = [0usize; 4];
        for base in bases {
            counts[base.to_index() as usize] += 1;
        }
        Self { counts }
    }

    /// Composition of a sequence; the sentinel is not counted.
    pub fn from_sequence(sequence: &Sequence) -> Self {
        Self::from_bases(sequence.bases())
    }

    #[inline]
    pub fn count(&self, base: Nucleotide) -> usize {
        self.counts[base.to_index() as usize]
    }

    /// `(base, count)` for all four bases in index order.
    pub fn counts(&self) -> impl Iterator<Item = (Nucleotide, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(idx, &count)| Nucleotide::from_index(idx as u8).map(|b| (b, count)))
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Fraction of bases equal to `base`; zero for an empty sequence.
    pub fn proportion(&self, base: Nucleotide) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(base) as f64 / total as f64
    }

    /// `(base, fraction)` for all four bases in index order.
    pub fn proportions(&self) -> [(Nucleotide, f64); 4] {
        Nucleotide::ALL.map(|b| (b, self.proportion(b)))
    }

    pub fn gc_content(&self) -> f64 {
        self.proportion(Nucleotide::G) + self.proportion(Nucleotide::C)
    }

    /// Generator weights matching this composition (absent bases omitted).
    pub fn to_distribution(&self) -> Result<BaseDistribution> {
        BaseDistribution::from_counts(self.counts())
    }
}
