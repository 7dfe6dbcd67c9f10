//! Random sequence generation.

use super::BaseDistribution;
use crate::base::Sequence;
use rand::Rng;

/// Generate `length` independent bases from `distribution`, followed by the
/// sentinel.
///
/// The result always has `length + 1` symbols with the sentinel only at the
/// end; `length = 0` yields the sentinel-only sequence.
///
/// ```
/// use longrep_sim::simulation::{generate, BaseDistribution};
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
///
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
/// let seq = generate(10, &BaseDistribution::uniform(), &mut rng);
/// assert_eq!(seq.len(), 11);
/// ```
pub fn generate<R: Rng + ?Sized>(
    length: usize,
    distribution: &BaseDistribution,
    rng: &mut R,
) -> Sequence {
    Sequence::terminated((0..length).map(|_| distribution.sample(&mut *rng)))
}
