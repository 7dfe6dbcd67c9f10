//! Simulation driver.
//!
//! Repeats generate-then-measure trials and collects one K value per trial.
//! Every trial owns an RNG seeded from a per-trial seed drawn up front from
//! the master RNG, so the output depends only on the master seed and not on
//! whether trials run sequentially or on the rayon pool.

use super::{generate, BaseDistribution, SimulationConfig, TrialSet};
use crate::errors::Result;
use crate::trie::compute_longest_repeat;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Run one trial: generate a sequence from `seed` and return its longest
/// repeat plus one.
pub fn run_trial(length: usize, distribution: &BaseDistribution, seed: u64) -> Result<usize> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let sequence = generate(length, distribution, &mut rng);
    let k = compute_longest_repeat(&sequence)?;
    trace!("trial seed={seed} length={length} k={k}");
    Ok(k + 1)
}

/// Run `trial_count` independent trials sequentially.
///
/// Returns exactly `trial_count` values in trial order, each `>= 1`.
pub fn run_trials<R: Rng + ?Sized>(
    length: usize,
    trial_count: usize,
    distribution: &BaseDistribution,
    rng: &mut R,
) -> Result<Vec<usize>> {
    draw_seeds(rng, trial_count)
        .into_iter()
        .map(|seed| run_trial(length, distribution, seed))
        .collect()
}

/// Parallel counterpart of [`run_trials`]; same seeds, same output.
pub fn run_trials_parallel<R: Rng + ?Sized>(
    length: usize,
    trial_count: usize,
    distribution: &BaseDistribution,
    rng: &mut R,
) -> Result<Vec<usize>> {
    draw_seeds(rng, trial_count)
        .par_iter()
        .map(|&seed| run_trial(length, distribution, seed))
        .collect()
}

fn draw_seeds<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.random()).collect()
}

/// Configured simulation holding its master RNG.
///
/// Successive calls to [`run`](Self::run) continue the same random stream,
/// so two runs of one `Simulation` differ while two `Simulation`s built with
/// the same seed agree run for run.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    /// Master RNG (Xoshiro256++), only used to draw per-trial seeds
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation from configuration.
    ///
    /// Without a configured seed the master RNG is seeded from the thread RNG.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the configured number of trials at the configured length.
    pub fn run(&mut self) -> Result<TrialSet> {
        self.run_with_progress(|| {})
    }

    /// Like [`run`](Self::run), calling `on_trial` once per finished trial
    /// (from worker threads when running in parallel).
    pub fn run_with_progress<F>(&mut self, on_trial: F) -> Result<TrialSet>
    where
        F: Fn() + Sync,
    {
        let length = self.config.length;
        let values = self.execute(length, &on_trial)?;
        Ok(TrialSet { length, values })
    }

    /// Run the configured number of trials for each of `lengths` in turn.
    pub fn sweep(&mut self, lengths: &[usize]) -> Result<Vec<TrialSet>> {
        self.sweep_with_progress(lengths, || {})
    }

    pub fn sweep_with_progress<F>(&mut self, lengths: &[usize], on_trial: F) -> Result<Vec<TrialSet>>
    where
        F: Fn() + Sync,
    {
        lengths
            .iter()
            .map(|&length| {
                let values = self.execute(length, &on_trial)?;
                Ok(TrialSet { length, values })
            })
            .collect()
    }

    fn execute<F>(&mut self, length: usize, on_trial: &F) -> Result<Vec<usize>>
    where
        F: Fn() + Sync,
    {
        let trials = self.config.trials;
        let distribution = &self.config.distribution;
        debug!(
            "running {trials} trials of length {length} ({})",
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let seeds = draw_seeds(&mut self.rng, trials);
        let measure = |&seed: &u64| {
            let value = run_trial(length, distribution, seed);
            on_trial();
            value
        };

        if self.config.parallel {
            seeds.par_iter().map(measure).collect()
        } else {
            seeds.iter().map(measure).collect()
        }
    }
}
