//! Candidate enumeration over one prefix group.
//!
//! Each worker owns one group of prefixes and, for every prefix,
//! enumerates all candidates from the prefix's own length up to the
//! maximum length, in strictly increasing length then lexicographic
//! order. The empty string is never a candidate: the empty prefix
//! starts its expansion at length 1.

use crate::digest::Digest;
use crate::keyspace::Alphabet;
use crate::progress::ProgressSink;
use crate::search::shared::SharedState;

/// Workers notify the sink once per this many locally tested
/// candidates, never per candidate.
pub(crate) const PROGRESS_BATCH: u64 = 5000;

/// Advance a mixed-radix odometer over `base` symbols, rightmost digit
/// fastest. Returns false once every combination has been visited.
pub(crate) fn advance(indices: &mut [usize], base: usize) -> bool {
    for slot in indices.iter_mut().rev() {
        *slot += 1;
        if *slot < base {
            return true;
        }
        *slot = 0;
    }
    false
}

/// Exhaustively test every candidate reachable from `group`'s prefixes
/// up to `max_len`, returning the exact number of candidates this
/// worker examined.
///
/// The termination signal is polled before every candidate, so the
/// worker returns promptly after a match elsewhere or an external stop.
/// On a local match the candidate is offered to the shared result slot
/// (first writer wins) and the signal is raised before returning.
pub(crate) fn search_group<D: Digest + ?Sized>(
    group: &[String],
    alphabet: &Alphabet,
    max_len: usize,
    target: &str,
    digest: &D,
    shared: &SharedState,
    sink: &dyn ProgressSink,
) -> u64 {
    // Increments the advisory counter, reports at batch boundaries,
    // and tests one candidate. True means the search is over.
    let check = |candidate: &str, local: u64| -> bool {
        shared.add_checked(1);
        if local % PROGRESS_BATCH == 0 {
            sink.report(shared.approx_checked(), candidate);
        }
        if digest.digest(candidate) == target {
            shared.try_record(candidate);
            shared.signal_stop();
            return true;
        }
        false
    };

    let mut local: u64 = 0;
    for prefix in group {
        let prefix_symbols = prefix.chars().count();
        for length in prefix_symbols..=max_len {
            if shared.should_stop() {
                return local;
            }
            if length == prefix_symbols {
                // The sole candidate of this length is the prefix
                // itself; the empty prefix contributes nothing here.
                if length == 0 {
                    continue;
                }
                local += 1;
                if check(prefix, local) {
                    return local;
                }
                continue;
            }

            let suffix_len = length - prefix_symbols;
            let mut indices = vec![0usize; suffix_len];
            loop {
                if shared.should_stop() {
                    return local;
                }
                let mut candidate = String::with_capacity(prefix.len() + suffix_len * 4);
                candidate.push_str(prefix);
                for &i in &indices {
                    candidate.push(alphabet.symbol(i));
                }
                local += 1;
                if check(&candidate, local) {
                    return local;
                }
                if !advance(&mut indices, alphabet.len()) {
                    break;
                }
            }
        }
    }
    local
}
