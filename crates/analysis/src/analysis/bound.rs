//! Asymptotic lower bound on the longest repeat.

use longrep_sim::simulation::BaseDistribution;

/// `ln(length + 1) / ln(1 / p_max)`, where `p_max` is the largest base
/// probability of `distribution`.
///
/// Returns `None` for a single-base distribution (`p_max = 1`), where the
/// bound is unbounded and every sequence repeats itself.
pub fn lower_bound(length: usize, distribution: &BaseDistribution) -> Option<f64> {
    let p_max = distribution.max_weight();
    if p_max >= 1.0 {
        return None;
    }
    Some(((length + 1) as f64).ln() / (1.0 / p_max).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use longrep_sim::base::Nucleotide;

    #[test]
    fn test_uniform_bound() {
        let dist = BaseDistribution::uniform();
        let bound = lower_bound(3, &dist).unwrap();
        assert!((bound - 1.0).abs() < 1e-12);

        let bound = lower_bound(1023, &dist).unwrap();
        assert!((bound - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_bound() {
        let bound = lower_bound(999, &BaseDistribution::reference()).unwrap();
        assert!((bound - 1000f64.ln() / 2.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(lower_bound(0, &BaseDistribution::uniform()), Some(0.0));
    }

    #[test]
    fn test_degenerate_distribution_has_no_bound() {
        let dist = BaseDistribution::new(vec![(Nucleotide::A, 1.0)]).unwrap();
        assert_eq!(lower_bound(100, &dist), None);
    }
}
