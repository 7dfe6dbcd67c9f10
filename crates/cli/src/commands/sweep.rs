use anyhow::{Context, Result};
use longrep_analysis::KSummary;
use longrep_sim::simulation::{BaseDistribution, Simulation, SimulationBuilder};
use serde::Serialize;

use crate::args::{OutputFormat, SweepArgs};
use crate::commands::simulate::{apply_trial_args, progress_for, tick};
use crate::printing::{format_summary, print_parameters};
use crate::utils::emit;

#[derive(Debug, Serialize)]
struct SweepReport<'a> {
    trials: usize,
    distribution: &'a BaseDistribution,
    seed: Option<u64>,
    summaries: Vec<KSummary>,
}

pub fn sweep(args: &SweepArgs) -> Result<()> {
    let first = args.lengths.first().copied().unwrap_or_default();
    let builder = SimulationBuilder::new()
        .length(first)
        .trials(args.trial.trials_or_default());
    let config = apply_trial_args(builder, &args.trial)
        .build_config()
        .context("Invalid simulation parameters")?;

    if args.trial.format == OutputFormat::Pretty {
        print_parameters(&config, &args.lengths);
    }

    let mut sim = Simulation::new(config);
    let pb = progress_for(&args.trial, total_trials(sim.config().trials, &args.lengths))?;
    let sets = sim
        .sweep_with_progress(&args.lengths, || tick(pb.as_ref()))
        .context("Sweep failed")?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let config = sim.config();
    let summaries: Vec<KSummary> = sets
        .iter()
        .map(|set| KSummary::new(set, &config.distribution))
        .collect();

    let text = match args.trial.format {
        OutputFormat::Pretty => summaries
            .iter()
            .map(|s| format_summary(s, None))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let report = SweepReport {
                trials: config.trials,
                distribution: &config.distribution,
                seed: config.seed,
                summaries,
            };
            serde_json::to_string_pretty(&report)? + "\n"
        }
    };
    emit(&text, args.trial.output.as_deref())
}

/// Trials run over the whole sweep, saturating instead of overflowing.
fn total_trials(trials: usize, lengths: &[usize]) -> usize {
    trials.saturating_mul(lengths.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_trials() {
        assert_eq!(total_trials(20, &[10, 100, 1000]), 60);
        assert_eq!(total_trials(0, &[10]), 0);
    }

    #[test]
    fn test_total_trials_saturates() {
        assert_eq!(total_trials(usize::MAX, &[10, 100]), usize::MAX);
    }
}
