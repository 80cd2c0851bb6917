//! keyrake - parallel keyspace-search engine
//!
//! The engine partitions an exhaustive candidate space across a fixed
//! pool of worker threads using fixed-length prefixes over an alphabet,
//! coordinates cooperative early termination once a match is found, and
//! reports progress through a caller-supplied sink. A benchmarking
//! harness compares sequential vs. partitioned execution over a grid of
//! (max length, worker count) combinations.

pub mod bench;
pub mod digest;
pub mod keyspace;
pub mod progress;
pub mod search;

// Re-exports for convenience
pub use bench::{BenchConfig, BenchmarkRow, Method, run_series};
pub use digest::{Digest, Sha256Digest};
pub use keyspace::{Alphabet, generate_prefixes, partition_round_robin};
pub use progress::{ChannelSink, LogSink, NullSink, ProgressSink, ProgressUpdate};
pub use search::{SearchOutcome, SearchReport, SearchTask, StopToken, run_search, run_sequential};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types
pub mod error {
    use thiserror::Error;

    /// Configuration errors, surfaced synchronously before any worker
    /// starts. Cancellation is not an error; it is reported through
    /// [`crate::SearchOutcome::Stopped`].
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ConfigError {
        #[error("alphabet must not be empty")]
        EmptyAlphabet,

        #[error("alphabet contains duplicate symbol {0:?}")]
        DuplicateSymbol(char),

        #[error("worker count must be at least 1")]
        NoWorkers,

        #[error("max length {max_len} is smaller than prefix length {prefix_len}")]
        MaxLenBelowPrefix { max_len: usize, prefix_len: usize },

        #[error("trial count must be at least 1")]
        NoTrials,

        #[error("benchmark needs at least one max-length value")]
        EmptyMaxLenValues,

        #[error("benchmark needs at least one worker count")]
        EmptyWorkerCounts,
    }

    pub type Result<T> = std::result::Result<T, ConfigError>;
}

pub use error::ConfigError;
