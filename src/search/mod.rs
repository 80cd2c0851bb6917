//! Parallel keyspace search.
//!
//! One invocation partitions the prefix set into disjoint groups,
//! spawns one worker thread per group, and blocks until every worker
//! has returned. Workers share a write-once termination signal and a
//! first-writer-wins result slot; the exact candidate total is summed
//! from per-worker local counts at join, never read from the advisory
//! shared counter.

pub mod coordinator;
pub mod shared;
pub mod task;
pub mod worker;

pub use coordinator::{SearchOutcome, SearchReport, run_search, run_sequential};
pub use shared::StopToken;
pub use task::SearchTask;
