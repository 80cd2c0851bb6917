//! Progress reporting seam between workers and the outside world.
//!
//! Workers call the sink at a bounded rate (once per batch of
//! candidates, never per candidate) and the call must not stall the
//! search, so every implementation here is non-blocking. The running
//! count comes from the advisory shared counter and may lag the true
//! total; the authoritative figure is the report's `total_checked`.

use crossbeam_channel::{Receiver, Sender, bounded};
use tracing::info;

/// One progress notification: the advisory running count across all
/// workers and the last candidate the reporting worker tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub checked: u64,
    pub last_candidate: String,
}

/// Receives `(running_count, last_candidate)` notifications from
/// workers. Implementations must return promptly; a slow sink stalls
/// the worker that called it.
pub trait ProgressSink: Send + Sync {
    fn report(&self, checked: u64, last_candidate: &str);
}

/// Discards all notifications. Used by the benchmark harness so
/// reporting cost never skews timing rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _checked: u64, _last_candidate: &str) {}
}

/// Logs each notification through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn report(&self, checked: u64, last_candidate: &str) {
        info!("checked {} candidates (last: {})", checked, last_candidate);
    }
}

/// Forwards notifications into a bounded channel without ever blocking
/// the worker: if the consumer falls behind, updates are dropped.
pub struct ChannelSink {
    tx: Sender<ProgressUpdate>,
}

impl ChannelSink {
    /// Create a sink and its receiving end with the given buffer size.
    pub fn bounded(cap: usize) -> (Self, Receiver<ProgressUpdate>) {
        let (tx, rx) = bounded(cap);
        (Self { tx }, rx)
    }
}

impl ProgressSink for ChannelSink {
    fn report(&self, checked: u64, last_candidate: &str) {
        // try_send keeps the worker moving when the buffer is full
        let _ = self.tx.try_send(ProgressUpdate {
            checked,
            last_candidate: last_candidate.to_string(),
        });
    }
}
