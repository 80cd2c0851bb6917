//! Coordinator: spawns one worker per prefix group and aggregates the
//! outcome.

use crate::digest::Digest;
use crate::keyspace::{generate_prefixes, partition_round_robin};
use crate::progress::ProgressSink;
use crate::search::shared::{SharedState, StopToken};
use crate::search::task::SearchTask;
use crate::search::worker::search_group;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal state of one run. The three variants are mutually
/// exclusive: a recorded match wins over a raised signal, and a raised
/// signal without a match means the run was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A candidate whose digest equals the target was recorded.
    Found(String),
    /// Every candidate in bounds was tested and none matched.
    Exhausted,
    /// The termination signal was raised externally before exhaustion.
    Stopped,
}

impl SearchOutcome {
    pub fn candidate(&self) -> Option<&str> {
        match self {
            SearchOutcome::Found(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Found(c) => write!(f, "found {:?}", c),
            SearchOutcome::Exhausted => write!(f, "exhausted"),
            SearchOutcome::Stopped => write!(f, "stopped"),
        }
    }
}

/// Result of one coordinator invocation.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
    /// Exact number of candidates examined, summed from each worker's
    /// own count after all of them returned.
    pub total_checked: u64,
}

impl SearchReport {
    /// Candidates examined per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.total_checked as f64 / secs
        }
    }
}

/// Run one partitioned search: build the prefix groups, spawn exactly
/// `task.workers` worker threads, and block until every worker has
/// returned. No worker outlives this call.
///
/// `stop` is the run's termination signal; triggering a clone of it
/// from another thread cancels the run. Pass a fresh token per run.
pub fn run_search<D: Digest + ?Sized>(
    task: &SearchTask,
    digest: &D,
    sink: &dyn ProgressSink,
    stop: &StopToken,
) -> SearchReport {
    let start = Instant::now();
    let prefixes = generate_prefixes(&task.alphabet, task.prefix_len);
    let groups = partition_round_robin(prefixes, task.workers)
        .expect("task validation guarantees workers >= 1");

    let shared = SharedState::new(stop.clone());
    let local_counts: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = groups
            .iter()
            .map(|group| {
                let shared = &shared;
                scope.spawn(move || {
                    search_group(
                        group.as_slice(),
                        &task.alphabet,
                        task.max_len,
                        &task.target,
                        digest,
                        shared,
                        sink,
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("search worker panicked"))
            .collect()
    });

    finish(&shared, start, local_counts.into_iter().sum())
}

/// Pure sequential baseline: enumerate the whole keyspace on the
/// calling thread, equivalent to a single worker holding the sole
/// empty prefix. `task.prefix_len` and `task.workers` are ignored.
pub fn run_sequential<D: Digest + ?Sized>(
    task: &SearchTask,
    digest: &D,
    sink: &dyn ProgressSink,
    stop: &StopToken,
) -> SearchReport {
    let start = Instant::now();
    let shared = SharedState::new(stop.clone());
    let group = [String::new()];
    let checked = search_group(
        &group,
        &task.alphabet,
        task.max_len,
        &task.target,
        digest,
        &shared,
        sink,
    );
    finish(&shared, start, checked)
}

fn finish(shared: &SharedState, start: Instant, total_checked: u64) -> SearchReport {
    let outcome = match shared.take_found() {
        Some(candidate) => SearchOutcome::Found(candidate),
        None if shared.should_stop() => SearchOutcome::Stopped,
        None => SearchOutcome::Exhausted,
    };
    SearchReport {
        outcome,
        elapsed: start.elapsed(),
        total_checked,
    }
}
