use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use keyrake::{
    Alphabet, BenchConfig, ChannelSink, Digest, NullSink, SearchTask, Sha256Digest, StopToken,
    run_search, run_sequential, run_series,
};

/// Alphabet used by the original demo: lower-case letters and digits.
const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Demo plaintext used when neither a target nor a plaintext is given.
const DEMO_PLAINTEXT: &str = "s3c";

#[derive(Parser)]
#[command(name = "keyrake")]
#[command(about = "Parallel keyspace-search engine")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the keyspace for the preimage of a target digest
    Crack {
        /// Target SHA-256 digest (lower-case hex)
        #[arg(long, conflicts_with = "plaintext")]
        target: Option<String>,

        /// Hash this text and search for it (demo mode)
        #[arg(long)]
        plaintext: Option<String>,

        /// Symbols of the candidate alphabet, in enumeration order
        #[arg(long, default_value = DEFAULT_ALPHABET)]
        alphabet: String,

        /// Maximum candidate length
        #[arg(long, default_value_t = 4)]
        max_len: usize,

        /// Partitioning prefix length
        #[arg(long, default_value_t = 1)]
        prefix_len: usize,

        /// Worker threads (defaults to available cores)
        #[arg(long)]
        workers: Option<usize>,

        /// Run the sequential baseline instead of the partitioned search
        #[arg(long)]
        sequential: bool,
    },
    /// Compare sequential vs. partitioned execution over a parameter grid
    Bench {
        /// Max-length values to sweep
        #[arg(long, value_delimiter = ',', default_value = "1,2,3")]
        max_lens: Vec<usize>,

        /// Worker counts to sweep
        #[arg(long, value_delimiter = ',', default_value = "1,2,4")]
        workers: Vec<usize>,

        /// Trials to average per row
        #[arg(long, default_value_t = 2)]
        trials: usize,

        /// Partitioning prefix length for the partitioned runs
        #[arg(long, default_value_t = 1)]
        prefix_len: usize,

        /// Symbols of the candidate alphabet, in enumeration order
        #[arg(long, default_value = DEFAULT_ALPHABET)]
        alphabet: String,

        /// Plaintext whose digest is the benchmark target
        #[arg(long, default_value = DEMO_PLAINTEXT)]
        plaintext: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Crack {
            target,
            plaintext,
            alphabet,
            max_len,
            prefix_len,
            workers,
            sequential,
        } => run_crack(
            target, plaintext, &alphabet, max_len, prefix_len, workers, sequential,
        ),
        Commands::Bench {
            max_lens,
            workers,
            trials,
            prefix_len,
            alphabet,
            plaintext,
        } => run_bench(max_lens, workers, trials, prefix_len, &alphabet, &plaintext),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_crack(
    target: Option<String>,
    plaintext: Option<String>,
    alphabet: &str,
    max_len: usize,
    prefix_len: usize,
    workers: Option<usize>,
    sequential: bool,
) -> Result<()> {
    let alphabet = Alphabet::new(alphabet)?;
    let workers = workers.unwrap_or_else(num_cpus::get);

    let target = match target {
        Some(t) => t,
        None => {
            let plaintext = plaintext.unwrap_or_else(|| DEMO_PLAINTEXT.to_string());
            let digest = Sha256Digest.digest(&plaintext);
            info!("demo mode: searching for digest of {:?} ({})", plaintext, digest);
            digest
        }
    };

    let prefix_count = alphabet.count_at(prefix_len);
    if prefix_count > 100_000 {
        warn!(
            "prefix length {} generates {} prefixes; expect a long setup",
            prefix_len, prefix_count
        );
    }

    let task = SearchTask::new(alphabet, max_len, prefix_len, workers, target)?;
    info!(
        "starting search: alphabet len={}, max_len={}, prefix_len={}, workers={}",
        task.alphabet.len(),
        task.max_len,
        task.prefix_len,
        task.workers
    );

    // Bounded channel sink: workers never block on a slow terminal.
    let (sink, progress_rx) = ChannelSink::bounded(64);
    let printer = std::thread::spawn(move || {
        for update in progress_rx {
            info!(
                "checked {} candidates (last: {})",
                update.checked, update.last_candidate
            );
        }
    });

    let stop = StopToken::new();
    let report = if sequential {
        run_sequential(&task, &Sha256Digest, &sink, &stop)
    } else {
        run_search(&task, &Sha256Digest, &sink, &stop)
    };

    drop(sink);
    let _ = printer.join();

    println!("outcome:    {}", report.outcome);
    println!("elapsed:    {:.4}s", report.elapsed.as_secs_f64());
    println!("checked:    {}", report.total_checked);
    println!("throughput: {:.0} candidates/sec", report.throughput());
    Ok(())
}

fn run_bench(
    max_lens: Vec<usize>,
    workers: Vec<usize>,
    trials: usize,
    prefix_len: usize,
    alphabet: &str,
    plaintext: &str,
) -> Result<()> {
    let config = BenchConfig {
        alphabet: Alphabet::new(alphabet)?,
        max_len_values: max_lens,
        prefix_len,
        worker_counts: workers,
        trials,
        target: Sha256Digest.digest(plaintext),
    };

    info!(
        "starting benchmark: max_lens={:?}, workers={:?}, trials={}, prefix_len={}",
        config.max_len_values, config.worker_counts, config.trials, config.prefix_len
    );

    // NullSink keeps progress reporting out of the timings.
    let rows = run_series(&config, &Sha256Digest, &NullSink)?;

    println!(
        "{:<12} {:>7} {:>7} {:>12} {:>14}",
        "method", "workers", "max_len", "avg_time_s", "avg_checked"
    );
    for row in &rows {
        println!("{}", row);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .init();
}
