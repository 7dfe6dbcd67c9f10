use clap::{Args, ValueEnum};
use longrep_sim::simulation::BaseDistribution;
use std::path::PathBuf;

use crate::defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Options shared by `simulate` and `sweep`.
#[derive(Args, Debug)]
pub struct TrialArgs {
    /// Number of trials per length
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// Base weights in draw order, e.g. "A=0.1,G=0.4,C=0.2,T=0.3"
    ///
    /// Defaults to the reference ratios. Weights must sum to 1.
    #[arg(short, long)]
    pub weights: Option<BaseDistribution>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run trials on a single thread
    #[arg(long, conflicts_with = "parallel")]
    pub sequential: bool,

    /// Run trials on the thread pool (the default unless a config file says otherwise)
    #[arg(long)]
    pub parallel: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Random bases per sequence (the terminator is extra)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// JSON simulation configuration
    ///
    /// The file must give `length` and `trials`; `distribution`, `seed` and
    /// `parallel` are optional. Any flag given on the command line replaces
    /// the file's value.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also print every trial value
    #[arg(long)]
    pub values: bool,

    #[command(flatten)]
    pub trial: TrialArgs,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Comma-separated sequence lengths
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub lengths: Vec<usize>,

    #[command(flatten)]
    pub trial: TrialArgs,
}

impl TrialArgs {
    pub fn trials_or_default(&self) -> usize {
        self.trials.unwrap_or(defaults::TRIALS)
    }
}
