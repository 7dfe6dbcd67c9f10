mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{SimulateArgs, SweepArgs};
use commands::{composition, measure, simulate, sweep};

/// Longrep: longest repeats in DNA
///
/// Measures the length of the longest substring that occurs at least twice in
/// a DNA sequence, and simulates how that length is distributed for random
/// sequences of a given length and base composition.
#[derive(Parser, Debug)]
#[command(name = "longrep")]
#[command(author, version, about = "Measures and simulates longest repeated substrings of DNA", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Log progress information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debugging information to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Measure the longest repeat of a DNA file.
    ///
    /// Accepts plain text or FASTA; headers and blank lines are skipped.
    Measure {
        /// Input file
        file: PathBuf,

        /// Also print the repeated substring itself
        #[arg(long)]
        show: bool,
    },

    /// Base composition of a DNA file.
    ///
    /// The printed ratios can be passed straight to `simulate --weights`.
    Composition {
        /// Input file
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Simulate the longest repeat of random sequences.
    ///
    /// Each trial generates a random sequence and records its longest
    /// repeat plus one.
    Simulate(Box<SimulateArgs>),

    /// Simulate several sequence lengths in one run.
    Sweep(SweepArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::init_logging(cli.verbose, cli.debug);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Measure { file, show } => {
            measure::measure_file(&file, show)?;
        }
        Commands::Composition { file, json } => {
            composition::show_composition(&file, json)?;
        }
        Commands::Simulate(args) => {
            simulate::simulate(&args)?;
        }
        Commands::Sweep(args) => {
            sweep::sweep(&args)?;
        }
    }

    Ok(())
}
