//! Validated input for one search invocation.

use crate::error::{ConfigError, Result};
use crate::keyspace::Alphabet;

/// Immutable input to one search invocation. Construction validates
/// the bounds, so a `SearchTask` in hand means no worker will ever see
/// an inconsistent configuration.
#[derive(Debug, Clone)]
pub struct SearchTask {
    /// Symbols defining the candidate space and its enumeration order.
    pub alphabet: Alphabet,
    /// Maximum candidate length, inclusive.
    pub max_len: usize,
    /// Length of the partitioning prefixes.
    pub prefix_len: usize,
    /// Number of worker threads (one per prefix group).
    pub workers: usize,
    /// Target code candidates are tested against.
    pub target: String,
}

impl SearchTask {
    /// Build a task, failing fast on invalid bounds: zero workers or
    /// `max_len < prefix_len`. The alphabet was validated at its own
    /// construction.
    pub fn new(
        alphabet: Alphabet,
        max_len: usize,
        prefix_len: usize,
        workers: usize,
        target: impl Into<String>,
    ) -> Result<Self> {
        if workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if max_len < prefix_len {
            return Err(ConfigError::MaxLenBelowPrefix {
                max_len,
                prefix_len,
            });
        }
        Ok(Self {
            alphabet,
            max_len,
            prefix_len,
            workers,
            target: target.into(),
        })
    }

    /// Total number of candidates this task enumerates when run to
    /// exhaustion (all lengths `1..=max_len`; the empty string is never
    /// a candidate).
    pub fn keyspace_size(&self) -> u64 {
        self.alphabet.keyspace_size(self.max_len)
    }
}
