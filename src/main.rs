use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use seqsearch::instrument::{Profiler, log_timed, time_search, with_profiling};
use seqsearch::search::parallel::{ParallelConfig, partitioned_search};
use seqsearch::search::{Algorithm, SearchKey};
use seqsearch::workload::{SampleConfig, generate_workload};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "seqsearch")]
#[command(about = "seqsearch - sequence search algorithms and a partitioned search harness")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Every algorithm in turn
    All,
    /// Left-to-right scan
    Linear,
    /// Iterative binary search
    Binary,
    /// Recursive binary search
    Recursive,
    /// Insertion point lookup
    Bisect,
    /// Interpolation search
    Interpolation,
    /// Hashed set membership
    Set,
}

impl CliAlgorithm {
    fn selected(self) -> Vec<Algorithm> {
        match self {
            CliAlgorithm::All => Algorithm::ALL.to_vec(),
            CliAlgorithm::Linear => vec![Algorithm::Linear],
            CliAlgorithm::Binary => vec![Algorithm::Binary],
            CliAlgorithm::Recursive => vec![Algorithm::Recursive],
            CliAlgorithm::Bisect => vec![Algorithm::Bisect],
            CliAlgorithm::Interpolation => vec![Algorithm::Interpolation],
            CliAlgorithm::Set => vec![Algorithm::Set],
        }
    }

    /// Algorithm the partitioned harness runs; `all` falls back to binary.
    fn harness_algorithm(self) -> Algorithm {
        match self {
            CliAlgorithm::All => Algorithm::Binary,
            other => other.selected()[0],
        }
    }
}

#[derive(clap::Args, Clone, Copy, Debug)]
struct ReportOptions {
    /// Print the elapsed time of every successful lookup
    #[arg(long)]
    timing: bool,
    /// Print a call/time profile table after the run
    #[arg(long)]
    profile: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random ascending sequence and run every algorithm on it
    Run {
        /// Number of unique values to generate (prompted for when omitted)
        #[arg(long)]
        size: Option<usize>,
        /// Largest value that may be drawn (defaults to the size)
        #[arg(long)]
        max_value: Option<u64>,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Value to look up (defaults to a random element of the sequence)
        #[arg(long)]
        target: Option<u64>,
        /// Number of harness workers (defaults to the available CPUs)
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Harness timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        #[command(flatten)]
        report: ReportOptions,
    },
    /// Search an explicit sequence of integers
    Search {
        /// Comma-separated sequence, e.g. 0,15,17,20,25
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        values: Vec<i64>,
        /// Value to look up
        #[arg(long, allow_hyphen_values = true)]
        target: i64,
        /// Algorithm to run
        #[arg(long, value_enum, default_value = "all")]
        algorithm: CliAlgorithm,
        /// Also run the partitioned harness with this many workers
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Harness timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        #[command(flatten)]
        report: ReportOptions,
    },
}

// --- Search Runs ---

/// Run each algorithm directly on `sequence` and print its outcome.
fn run_algorithms<T: SearchKey>(
    sequence: &[T],
    target: &T,
    algorithms: &[Algorithm],
    report: ReportOptions,
) -> anyhow::Result<()> {
    let profiler = Profiler::new();
    let mut failed = 0;

    for &algorithm in algorithms {
        let name = algorithm.to_string();
        let search = with_profiling(&profiler, name.as_str(), algorithm.search_fn::<T>());
        let timed = time_search(&search, sequence, target);
        log_timed(&name, target, &timed);

        match &timed.result {
            Ok(outcome) => println!("{}: {}", algorithm, outcome),
            Err(e) => {
                failed += 1;
                println!("{}: error: {}", algorithm, e);
            }
        }
        if report.timing {
            if let Some(line) = timed.summary(target) {
                println!("  {}", line);
            }
        }
    }

    if report.profile {
        println!("\nProfile:");
        print!("{}", profiler.report());
    }

    if failed > 0 {
        bail!("{} of {} searches failed", failed, algorithms.len());
    }
    Ok(())
}

/// Run `algorithm` through the partitioned harness and print every partition.
fn run_partitioned<T: SearchKey>(
    algorithm: Algorithm,
    sequence: &[T],
    target: &T,
    config: &ParallelConfig,
) -> anyhow::Result<()> {
    println!(
        "\nPartitioned {} search with {} workers",
        algorithm, config.num_workers
    );

    let result = partitioned_search(algorithm.search_fn::<T>(), sequence, target, config)
        .context("partitioned search failed")?;

    for outcome in result.by_partition() {
        println!(
            "  partition {} {}: {}",
            outcome.partition.index, outcome.partition, outcome.outcome
        );
    }
    println!("  global: {}", result.global_outcome());
    println!("  elapsed: {:.2?}", result.elapsed);

    Ok(())
}

fn prompt_size() -> anyhow::Result<usize> {
    println!("Please enter number of items to randomly generate:");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read item count")?;
    let line = line.trim();
    line.parse::<usize>()
        .with_context(|| format!("invalid item count: '{}'", line))
}

struct RunOptions {
    size: Option<usize>,
    max_value: Option<u64>,
    seed: Option<u64>,
    target: Option<u64>,
    workers: Option<usize>,
    timeout: Option<Duration>,
    report: ReportOptions,
}

fn run_demo(options: RunOptions) -> anyhow::Result<()> {
    let size = match options.size {
        Some(size) => size,
        None => prompt_size()?,
    };

    let mut sample = SampleConfig::with_size(size).with_seed_option(options.seed);
    if let Some(max_value) = options.max_value {
        sample = sample.with_max_value(max_value);
    }
    let workload = generate_workload(&sample).context("failed to generate sequence")?;
    let target = options.target.unwrap_or(workload.target);
    println!("search value is {}", target);

    let searches = run_algorithms(
        &workload.sequence,
        &target,
        &Algorithm::ALL,
        options.report,
    );

    let config = ParallelConfig::for_algorithm(Algorithm::Binary)
        .with_workers(num_cpus::get().min(workload.sequence.len()))
        .with_workers_option(options.workers)
        .with_timeout_option(options.timeout);
    run_partitioned(Algorithm::Binary, &workload.sequence, &target, &config)?;

    searches
}

// --- Main Function ---

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Run {
            size,
            max_value,
            seed,
            target,
            workers,
            timeout,
            report,
        } => run_demo(RunOptions {
            size,
            max_value,
            seed,
            target,
            workers,
            timeout: timeout.map(Duration::from_secs),
            report,
        }),
        Commands::Search {
            values,
            target,
            algorithm,
            workers,
            timeout,
            report,
        } => run_algorithms(&values, &target, &algorithm.selected(), report).and_then(|()| {
            match workers {
                Some(workers) => {
                    let harness_algorithm = algorithm.harness_algorithm();
                    let config = ParallelConfig::for_algorithm(harness_algorithm)
                        .with_workers(workers)
                        .with_timeout_option(timeout.map(Duration::from_secs));
                    run_partitioned(harness_algorithm, &values, &target, &config)
                }
                None => Ok(()),
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
