//! Tomasulo simulator CLI.
//!
//! This binary is a thin driver over `tomasim-core`. It performs:
//! 1. **Pipeline run:** Load a JSON instruction trace, simulate it, and print statistics or JSON.
//! 2. **Predictor run:** Replay a JSON branch trace through one of the direction predictors.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tomasim_core::Simulator;
use tomasim_core::common::SimResult;
use tomasim_core::config::{BranchPredictorKind, Config};
use tomasim_core::sim::simulator::{TimingRow, timing_report};
use tomasim_core::sim::{branch_sim, loader};

#[derive(Parser, Debug)]
#[command(
    name = "tomasim",
    author,
    version,
    about = "Tomasulo out-of-order pipeline simulator",
    long_about = "Simulate instruction traces on a Tomasulo core, or evaluate branch predictors on branch traces.\n\nExamples:\n  tomasim run --trace trace.json --timing\n  tomasim predict --branches branches.json --predictor perceptron"
)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate an instruction trace on the Tomasulo core.
    Run {
        /// JSON instruction trace.
        #[arg(short, long)]
        trace: PathBuf,

        /// JSON configuration file (defaults are used for omitted fields).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also report per-instruction timestamps.
        #[arg(long)]
        timing: bool,

        /// Emit JSON instead of the text summary.
        #[arg(long)]
        json: bool,
    },

    /// Replay a branch trace through a direction predictor.
    Predict {
        /// JSON branch trace.
        #[arg(short, long)]
        branches: PathBuf,

        /// Predictor to evaluate (overrides the configuration file).
        #[arg(short, long, value_enum)]
        predictor: Option<PredictorArg>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Dynamic instruction count, for mispredictions per kilo-instruction.
        #[arg(long)]
        instructions: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PredictorArg {
    TwoBit,
    TwoLevel,
    Perceptron,
}

impl From<PredictorArg> for BranchPredictorKind {
    fn from(arg: PredictorArg) -> Self {
        match arg {
            PredictorArg::TwoBit => Self::TwoBit,
            PredictorArg::TwoLevel => Self::TwoLevel,
            PredictorArg::Perceptron => Self::Perceptron,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            trace,
            config,
            timing,
            json,
        } => cmd_run(&trace, config.as_deref(), timing, json),
        Commands::Predict {
            branches,
            predictor,
            config,
            instructions,
        } => cmd_predict(&branches, predictor, config.as_deref(), instructions),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the `tracing` subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> SimResult<Config> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(Config::default());
    };
    debug!(path = %path.display(), "loading config");
    Config::load(path)
}

/// Simulates a trace and prints the result.
fn cmd_run(trace_path: &Path, config: Option<&Path>, timing: bool, json: bool) -> SimResult<()> {
    let sim = Simulator::new(load_config(config)?)?;
    let mut trace = loader::load_trace(trace_path)?;
    let report = sim.run(&mut trace)?;

    if json {
        let timing_rows = timing.then(|| timing_report(&trace));
        println!("{}", report.to_json(timing_rows.as_deref())?);
        return Ok(());
    }

    if timing {
        print_timing(&timing_report(&trace));
    }
    report.stats.print();
    Ok(())
}

fn print_timing(rows: &[TimingRow]) {
    let cell = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |c| c.to_string());
    println!(
        "{:>6}  {:>10}  {:<12} {:>8} {:>8} {:>8} {:>8}",
        "index", "pc", "op", "dispatch", "issue", "execute", "cdb"
    );
    for row in rows {
        println!(
            "{:>6}  {:>#10x}  {:<12} {:>8} {:>8} {:>8} {:>8}",
            row.index,
            row.pc,
            format!("{:?}", row.op),
            cell(row.dispatch),
            cell(row.issue),
            cell(row.execute),
            cell(row.cdb),
        );
    }
}

/// Replays a branch trace and prints prediction accuracy.
fn cmd_predict(
    branches_path: &Path,
    predictor: Option<PredictorArg>,
    config: Option<&Path>,
    instructions: Option<u64>,
) -> SimResult<()> {
    let mut config = load_config(config)?;
    if let Some(kind) = predictor {
        config.predictor.kind = kind.into();
    }
    let sim = Simulator::new(config)?;
    let branches = loader::load_branches(branches_path)?;

    let mut bp = sim.predictor();
    let stats = branch_sim::run_predictor(&mut bp, &branches);

    println!("predictor                {:?}", sim.config().predictor.kind);
    stats.print();
    if let Some(n) = instructions {
        println!("  bp.mpki                {:.3}", stats.mispredictions_per_kilo(n));
    }
    Ok(())
}
