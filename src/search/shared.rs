//! State shared between the coordinator and its workers for one run.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Caller-owned handle to the run's termination signal.
///
/// The token handed to `run_search` *is* the signal workers poll, so a
/// clone held by the caller can cancel the run from outside. The flag
/// is monotonic for the run's lifetime: once set it is never cleared.
/// Use a fresh token per run; a token that has already been triggered
/// stops the next run before it enumerates anything.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    flag: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request termination. First writer wins; later calls are no-ops.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Termination signal, result slot, and advisory progress counter for
/// one invocation. Created fresh per run and discarded at its end.
#[derive(Debug)]
pub struct SharedState {
    stop: StopToken,
    found: Mutex<Option<String>>,
    checked: AtomicU64,
}

impl SharedState {
    pub fn new(stop: StopToken) -> Self {
        Self {
            stop,
            found: Mutex::new(None),
            checked: AtomicU64::new(0),
        }
    }

    /// Check the termination signal. Workers poll this at every
    /// candidate so stop latency stays low.
    pub fn should_stop(&self) -> bool {
        self.stop.is_triggered()
    }

    /// Raise the termination signal.
    pub fn signal_stop(&self) {
        self.stop.trigger();
    }

    /// Record a found candidate. Only the first writer's candidate is
    /// kept; under a race between simultaneous finds, which one lands
    /// is non-deterministic and accepted. Returns true if this call
    /// filled the slot.
    pub fn try_record(&self, candidate: &str) -> bool {
        let mut slot = self.found.lock().unwrap();
        if slot.is_none() {
            *slot = Some(candidate.to_string());
            true
        } else {
            false
        }
    }

    /// Take the recorded candidate, if any.
    pub fn take_found(&self) -> Option<String> {
        self.found.lock().unwrap().take()
    }

    /// Bump the advisory counter. Relaxed ordering: the value is for
    /// progress display only and may lag; the exact total is summed
    /// from per-worker local counts after join.
    pub fn add_checked(&self, n: u64) {
        self.checked.fetch_add(n, Ordering::Relaxed);
    }

    /// Advisory running count across all workers.
    pub fn approx_checked(&self) -> u64 {
        self.checked.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_token_monotonic() {
        let token = StopToken::new();
        assert!(!token.is_triggered());
        token.trigger();
        assert!(token.is_triggered());
        token.trigger();
        assert!(token.is_triggered());
    }

    #[test]
    fn test_stop_token_clones_share_the_flag() {
        let token = StopToken::new();
        let clone = token.clone();
        clone.trigger();
        assert!(token.is_triggered());
    }

    #[test]
    fn test_first_writer_wins() {
        let shared = SharedState::new(StopToken::new());
        assert!(shared.try_record("first"));
        assert!(!shared.try_record("second"));
        assert_eq!(shared.take_found(), Some("first".to_string()));
    }

    #[test]
    fn test_advisory_counter_accumulates() {
        let shared = SharedState::new(StopToken::new());
        shared.add_checked(3);
        shared.add_checked(4);
        assert_eq!(shared.approx_checked(), 7);
    }

    #[test]
    fn test_shared_state_sees_external_trigger() {
        let token = StopToken::new();
        let shared = SharedState::new(token.clone());
        assert!(!shared.should_stop());
        token.trigger();
        assert!(shared.should_stop());
    }
}
