//! Benchmark harness: sequential baseline vs. partitioned search over
//! a grid of (max length, worker count) combinations.
//!
//! The harness only orchestrates repeated coordinator invocations and
//! averages their scalar outputs; rendering the rows is the caller's
//! business. Invocations run strictly one at a time so no two rows
//! ever contend for the same cores.

use crate::digest::Digest;
use crate::error::{ConfigError, Result};
use crate::keyspace::Alphabet;
use crate::progress::ProgressSink;
use crate::search::{SearchReport, SearchTask, StopToken, run_search, run_sequential};
use std::time::Duration;

/// How a row's figures were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Single-threaded enumeration of the whole keyspace.
    Sequential,
    /// Prefix-partitioned search across worker threads.
    Partitioned,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::Sequential => "sequential",
            Method::Partitioned => "partitioned",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One averaged benchmark measurement. Sequential rows carry
/// `workers = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub method: Method,
    pub workers: usize,
    pub max_len: usize,
    pub avg_elapsed: Duration,
    pub avg_checked: f64,
}

impl std::fmt::Display for BenchmarkRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12} {:>7} {:>7} {:>12.6} {:>14.1}",
            self.method.label(),
            self.workers,
            self.max_len,
            self.avg_elapsed.as_secs_f64(),
            self.avg_checked
        )
    }
}

/// Parameters for one harness run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub alphabet: Alphabet,
    /// Max-length values to sweep, in output order.
    pub max_len_values: Vec<usize>,
    /// Prefix length used by the partitioned runs.
    pub prefix_len: usize,
    /// Worker counts to sweep for each max length.
    pub worker_counts: Vec<usize>,
    /// Trials to average per row.
    pub trials: usize,
    pub target: String,
}

impl BenchConfig {
    fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.max_len_values.is_empty() {
            return Err(ConfigError::EmptyMaxLenValues);
        }
        if self.worker_counts.is_empty() {
            return Err(ConfigError::EmptyWorkerCounts);
        }
        // Reject every combination upfront so no partial series runs.
        if self.worker_counts.contains(&0) {
            return Err(ConfigError::NoWorkers);
        }
        if let Some(&max_len) = self.max_len_values.iter().find(|&&m| m < self.prefix_len) {
            return Err(ConfigError::MaxLenBelowPrefix {
                max_len,
                prefix_len: self.prefix_len,
            });
        }
        Ok(())
    }
}

/// Run the full series and return one row per (method, parameter)
/// combination, averaged over `trials`.
///
/// Row order is an external contract: for each max length, first the
/// sequential baseline, then one partitioned row per worker count, in
/// the order the config lists them.
pub fn run_series<D: Digest + ?Sized>(
    config: &BenchConfig,
    digest: &D,
    sink: &dyn ProgressSink,
) -> Result<Vec<BenchmarkRow>> {
    config.validate()?;
    let mut rows = Vec::with_capacity(config.max_len_values.len() * (1 + config.worker_counts.len()));

    for &max_len in &config.max_len_values {
        let baseline = SearchTask::new(
            config.alphabet.clone(),
            max_len,
            0,
            1,
            config.target.as_str(),
        )?;
        let (avg_elapsed, avg_checked) = average(config.trials, || {
            run_sequential(&baseline, digest, sink, &StopToken::new())
        });
        rows.push(BenchmarkRow {
            method: Method::Sequential,
            workers: 0,
            max_len,
            avg_elapsed,
            avg_checked,
        });

        for &workers in &config.worker_counts {
            let task = SearchTask::new(
                config.alphabet.clone(),
                max_len,
                config.prefix_len,
                workers,
                config.target.as_str(),
            )?;
            let (avg_elapsed, avg_checked) = average(config.trials, || {
                run_search(&task, digest, sink, &StopToken::new())
            });
            rows.push(BenchmarkRow {
                method: Method::Partitioned,
                workers,
                max_len,
                avg_elapsed,
                avg_checked,
            });
        }
    }
    Ok(rows)
}

fn average(trials: usize, mut run: impl FnMut() -> SearchReport) -> (Duration, f64) {
    let mut total_elapsed = Duration::ZERO;
    let mut total_checked: u64 = 0;
    for _ in 0..trials {
        let report = run();
        total_elapsed += report.elapsed;
        total_checked += report.total_checked;
    }
    (
        total_elapsed / trials as u32,
        total_checked as f64 / trials as f64,
    )
}
