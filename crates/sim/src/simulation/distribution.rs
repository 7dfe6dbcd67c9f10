//! Categorical distribution over the DNA alphabet.

use crate::base::Nucleotide;
use crate::errors::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Allowed deviation of the weight total from 1.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Ordered list of `(base, weight)` pairs used to draw random bases.
///
/// Order matters: a draw walks the entries in the order given and picks the
/// first base whose cumulative weight reaches the draw, so two distributions
/// with the same weights in different orders produce different sequences
/// from the same random stream.
///
/// Every weight lies in (0, 1], no base is listed twice and the weights sum
/// to 1 within [`DISTRIBUTION_TOLERANCE`]. Bases that are absent have
/// probability zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Nucleotide, f64)>", into = "Vec<(Nucleotide, f64)>")]
pub struct BaseDistribution {
    entries: Vec<(Nucleotide, f64)>,
}

impl BaseDistribution {
    /// Validate and wrap an ordered list of weights.
    pub fn new(entries: Vec<(Nucleotide, f64)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidDistribution("no bases given".to_string()));
        }

        for (i, &(base, weight)) in entries.iter().enumerate() {
            // Written this way so that NaN is rejected too.
            if !(weight > 0.0 && weight <= 1.0) {
                return Err(Error::InvalidDistribution(format!(
                    "weight for {base} must be in (0, 1], got {weight}"
                )));
            }
            if entries[..i].iter().any(|&(seen, _)| seen == base) {
                return Err(Error::InvalidDistribution(format!(
                    "base {base} listed more than once"
                )));
            }
        }

        let total: f64 = entries.iter().map(|&(_, w)| w).sum();
        if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(Error::InvalidDistribution(format!(
                "weights sum to {total}, expected 1"
            )));
        }

        Ok(Self { entries })
    }

    /// The base ratios used for the reference simulations:
    /// A 0.1, G 0.4, C 0.2, T 0.3 (in that order).
    pub fn reference() -> Self {
        Self {
            entries: vec![
                (Nucleotide::A, 0.1),
                (Nucleotide::G, 0.4),
                (Nucleotide::C, 0.2),
                (Nucleotide::T, 0.3),
            ],
        }
    }

    /// Equal weight for all four bases.
    pub fn uniform() -> Self {
        Self {
            entries: Nucleotide::ALL.iter().map(|&b| (b, 0.25)).collect(),
        }
    }

    /// Normalise observed base counts into a distribution.
    ///
    /// Bases with a zero count are left out. Fails if every count is zero.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Nucleotide, usize)>,
    {
        let counts: Vec<(Nucleotide, usize)> =
            counts.into_iter().filter(|&(_, c)| c > 0).collect();
        let total: usize = counts.iter().map(|&(_, c)| c).sum();
        if total == 0 {
            return Err(Error::InvalidDistribution(
                "cannot derive weights from zero observations".to_string(),
            ));
        }

        let entries = counts
            .into_iter()
            .map(|(base, c)| (base, c as f64 / total as f64))
            .collect();
        Self::new(entries)
    }

    /// The `(base, weight)` pairs in draw order.
    #[inline]
    pub fn entries(&self) -> &[(Nucleotide, f64)] {
        &self.entries
    }

    /// Probability of `base`; zero if the base is not listed.
    pub fn weight(&self, base: Nucleotide) -> f64 {
        self.entries
            .iter()
            .find(|&&(b, _)| b == base)
            .map_or(0.0, |&(_, w)| w)
    }

    /// Largest single-base probability.
    pub fn max_weight(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w).fold(0.0, f64::max)
    }

    /// Pick the base for a uniform draw `u` in [0, 1).
    ///
    /// Walks the entries accumulating weights and returns the first base
    /// whose cumulative weight is `>= u`. If round-off leaves the total just
    /// below `u`, the last entry is returned.
    pub fn select(&self, u: f64) -> Nucleotide {
        let mut cumulative = 0.0;
        let mut last = Nucleotide::A;
        for &(base, weight) in &self.entries {
            cumulative += weight;
            last = base;
            if u <= cumulative {
                return base;
            }
        }
        last
    }

    /// Draw one base.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Nucleotide {
        self.select(rng.random::<f64>())
    }
}

impl Default for BaseDistribution {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<(Nucleotide, f64)>> for BaseDistribution {
    type Error = Error;

    fn try_from(entries: Vec<(Nucleotide, f64)>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<BaseDistribution> for Vec<(Nucleotide, f64)> {
    fn from(dist: BaseDistribution) -> Self {
        dist.entries
    }
}

impl fmt::Display for BaseDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (base, weight)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{base}={weight}")?;
        }
        Ok(())
    }
}

impl FromStr for BaseDistribution {
    type Err = Error;

    /// Parse `"A=0.1,G=0.4,C=0.2,T=0.3"`. `:` is accepted in place of `=`.
    fn from_str(s: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for item in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (base, weight) = item
                .split_once(['=', ':'])
                .ok_or_else(|| Error::InvalidDistribution(format!("expected BASE=WEIGHT, got '{item}'")))?;

            let base = match base.trim().as_bytes() {
                [byte] => Nucleotide::from_ascii(*byte),
                _ => None,
            }
            .ok_or_else(|| Error::InvalidDistribution(format!("unknown base '{}'", base.trim())))?;

            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| Error::InvalidDistribution(format!("bad weight in '{item}'")))?;

            entries.push((base, weight));
        }
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_reference_is_valid() {
        let dist = BaseDistribution::reference();
        assert!(BaseDistribution::new(dist.entries().to_vec()).is_ok());
        assert_eq!(dist.max_weight(), 0.4);
        assert_eq!(dist.weight(Nucleotide::C), 0.2);
    }

    #[test]
    fn test_rejects_bad_weights() {
        let cases = vec![
            vec![],
            vec![(Nucleotide::A, 0.5), (Nucleotide::C, 0.4)],
            vec![(Nucleotide::A, 1.2), (Nucleotide::C, -0.2)],
            vec![(Nucleotide::A, 0.0), (Nucleotide::C, 1.0)],
            vec![(Nucleotide::A, f64::NAN)],
            vec![(Nucleotide::A, 0.5), (Nucleotide::A, 0.5)],
        ];
        for entries in cases {
            let err = BaseDistribution::new(entries.clone()).unwrap_err();
            assert!(
                matches!(err, Error::InvalidDistribution(_)),
                "{entries:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_sum_within_tolerance() {
        let dist = BaseDistribution::new(vec![
            (Nucleotide::A, 0.3333333),
            (Nucleotide::C, 0.3333333),
            (Nucleotide::G, 0.3333334),
        ]);
        assert!(dist.is_ok());
    }

    #[test]
    fn test_select_walks_in_declared_order() {
        let dist = BaseDistribution::reference();
        assert_eq!(dist.select(0.0), Nucleotide::A);
        assert_eq!(dist.select(0.1), Nucleotide::A);
        assert_eq!(dist.select(0.1000001), Nucleotide::G);
        assert_eq!(dist.select(0.5), Nucleotide::G);
        assert_eq!(dist.select(0.65), Nucleotide::C);
        assert_eq!(dist.select(0.99), Nucleotide::T);
        // Beyond the accumulated total falls back to the last entry.
        assert_eq!(dist.select(1.5), Nucleotide::T);
    }

    #[test]
    fn test_degenerate_distribution_always_selects_single_base() {
        let dist = BaseDistribution::new(vec![(Nucleotide::G, 1.0)]).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng), Nucleotide::G);
        }
    }

    #[test]
    fn test_sample_frequencies_follow_weights() {
        let dist = BaseDistribution::reference();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let n = 100_000;
        let mut counts = [0usize; 4];
        for _ in 0..n {
            counts[dist.sample(&mut rng).to_index() as usize] += 1;
        }
        for &(base, weight) in dist.entries() {
            let observed = counts[base.to_index() as usize] as f64 / n as f64;
            assert!((observed - weight).abs() < 0.01, "{base}: {observed} vs {weight}");
        }
    }

    #[test]
    fn test_from_counts_skips_zero() {
        let dist = BaseDistribution::from_counts([
            (Nucleotide::A, 1),
            (Nucleotide::C, 0),
            (Nucleotide::G, 3),
        ])
        .unwrap();
        assert_eq!(dist.entries(), &[(Nucleotide::A, 0.25), (Nucleotide::G, 0.75)]);
        assert!(BaseDistribution::from_counts([(Nucleotide::A, 0)]).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let dist: BaseDistribution = "A=0.1, G:0.4,C=0.2,t=0.3".parse().unwrap();
        assert_eq!(dist, BaseDistribution::reference());
        assert_eq!(dist.to_string(), "A=0.1,G=0.4,C=0.2,T=0.3");

        assert!("A=0.5,N=0.5".parse::<BaseDistribution>().is_err());
        assert!("A0.5".parse::<BaseDistribution>().is_err());
        assert!("A=x".parse::<BaseDistribution>().is_err());
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&BaseDistribution::uniform()).unwrap();
        let back: BaseDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BaseDistribution::uniform());

        let bad = r#"[["A", 0.7], ["C", 0.7]]"#;
        assert!(serde_json::from_str::<BaseDistribution>(bad).is_err());
    }
}
