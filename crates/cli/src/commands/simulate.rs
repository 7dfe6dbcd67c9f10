use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::info;
use longrep_analysis::KSummary;
use longrep_sim::simulation::{Simulation, SimulationBuilder, SimulationConfig, TrialSet};
use serde::Serialize;

use crate::args::{OutputFormat, SimulateArgs, TrialArgs};
use crate::defaults;
use crate::printing::{format_summary, print_parameters};
use crate::utils::{emit, trial_progress_bar};

#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    config: &'a SimulationConfig,
    summary: KSummary,
    values: &'a [usize],
}

pub fn simulate(args: &SimulateArgs) -> Result<()> {
    let builder = match &args.config {
        Some(path) => {
            let config = SimulationConfig::from_json_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            info!("loaded configuration from {}", path.display());
            let mut builder = SimulationBuilder::from_config(config);
            if let Some(length) = args.length {
                builder = builder.length(length);
            }
            if let Some(trials) = args.trial.trials {
                builder = builder.trials(trials);
            }
            builder
        }
        None => SimulationBuilder::new()
            .length(args.length.unwrap_or(defaults::LENGTH))
            .trials(args.trial.trials_or_default()),
    };
    let config = apply_trial_args(builder, &args.trial)
        .build_config()
        .context("Invalid simulation parameters")?;

    if args.trial.format == OutputFormat::Pretty {
        print_parameters(&config, &[config.length]);
    }

    let mut sim = Simulation::new(config);
    let pb = progress_for(&args.trial, sim.config().trials)?;
    let set = sim
        .run_with_progress(|| tick(pb.as_ref()))
        .context("Simulation failed")?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let text = render(sim.config(), &set, args.values, args.trial.format)?;
    emit(&text, args.trial.output.as_deref())
}

/// Apply the flags common to `simulate` and `sweep` on top of `builder`.
pub fn apply_trial_args(mut builder: SimulationBuilder, args: &TrialArgs) -> SimulationBuilder {
    if let Some(weights) = &args.weights {
        builder = builder.distribution(weights.clone());
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if args.sequential {
        builder = builder.parallel(false);
    } else if args.parallel {
        builder = builder.parallel(true);
    }
    builder
}

pub fn progress_for(args: &TrialArgs, total: usize) -> Result<Option<ProgressBar>> {
    if args.progress {
        Ok(Some(trial_progress_bar(total as u64)?))
    } else {
        Ok(None)
    }
}

pub fn tick(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

fn render(
    config: &SimulationConfig,
    set: &TrialSet,
    show_values: bool,
    format: OutputFormat,
) -> Result<String> {
    let summary = KSummary::new(set, &config.distribution);
    match format {
        OutputFormat::Pretty => {
            let values = show_values.then_some(set.values.as_slice());
            Ok(format_summary(&summary, values))
        }
        OutputFormat::Json => {
            let report = SimulationReport {
                config,
                summary,
                values: &set.values,
            };
            Ok(serde_json::to_string_pretty(&report)? + "\n")
        }
    }
}
