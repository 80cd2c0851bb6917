//! Alphabet handling and keyspace partitioning.
//!
//! The keyspace is split among workers by fixed-length prefixes: every
//! string of `prefix_len` symbols becomes the root of one enumeration
//! subtree, and the prefixes are dealt out round-robin so the groups
//! have near-equal cost even when later prefixes expand into larger
//! subtrees.

use crate::error::{ConfigError, Result};

/// Ordered set of unique symbols. Index 0 is the "smallest" symbol and
/// defines the lexicographic enumeration order everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of symbols.
    ///
    /// Fails on an empty string or on duplicate symbols, since a
    /// duplicate would make candidates enumerate twice.
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        let symbols: Vec<char> = symbols.chars().collect();
        for (i, &c) in symbols.iter().enumerate() {
            if symbols[..i].contains(&c) {
                return Err(ConfigError::DuplicateSymbol(c));
            }
        }
        Ok(Self { symbols })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at the given index. Panics if out of range.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Symbols in enumeration order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of strings of exactly `len` symbols.
    pub fn count_at(&self, len: usize) -> u64 {
        (self.len() as u64).pow(len as u32)
    }

    /// Total number of candidates of lengths `1..=max_len`.
    pub fn keyspace_size(&self, max_len: usize) -> u64 {
        (1..=max_len).map(|l| self.count_at(l)).sum()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Generate every string of exactly `prefix_len` symbols, in
/// lexicographic (alphabet-index) order.
///
/// `prefix_len == 0` yields a single empty prefix: the whole keyspace
/// stays in one group before length expansion. The output has
/// `|alphabet| ^ prefix_len` entries; guarding against combinatorial
/// blow-up is the caller's job.
pub fn generate_prefixes(alphabet: &Alphabet, prefix_len: usize) -> Vec<String> {
    let mut prefixes = vec![String::new()];
    for _ in 0..prefix_len {
        let mut next = Vec::with_capacity(prefixes.len() * alphabet.len());
        for p in &prefixes {
            for &c in alphabet.symbols() {
                let mut s = String::with_capacity(p.len() + 1);
                s.push_str(p);
                s.push(c);
                next.push(s);
            }
        }
        prefixes = next;
    }
    prefixes
}

/// Deal prefixes into `workers` disjoint groups round-robin: group `i`
/// receives the prefixes at positions `i, i + workers, i + 2*workers, ...`.
///
/// Every prefix lands in exactly one group and group sizes differ by at
/// most one. Round-robin rather than block partitioning keeps the
/// per-group enumeration cost balanced when adjacent prefixes have
/// correlated subtree sizes.
pub fn partition_round_robin(prefixes: Vec<String>, workers: usize) -> Result<Vec<Vec<String>>> {
    if workers == 0 {
        return Err(ConfigError::NoWorkers);
    }
    let mut groups: Vec<Vec<String>> = (0..workers)
        .map(|_| Vec::with_capacity(prefixes.len() / workers + 1))
        .collect();
    for (i, prefix) in prefixes.into_iter().enumerate() {
        groups[i % workers].push(prefix);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_rejects_empty() {
        assert_eq!(Alphabet::new(""), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        assert_eq!(Alphabet::new("aba"), Err(ConfigError::DuplicateSymbol('a')));
    }

    #[test]
    fn test_alphabet_order_is_preserved() {
        let alphabet = Alphabet::new("cab").unwrap();
        assert_eq!(alphabet.symbols(), &['c', 'a', 'b']);
        assert_eq!(alphabet.symbol(0), 'c');
    }

    #[test]
    fn test_keyspace_size() {
        let alphabet = Alphabet::new("ab").unwrap();
        assert_eq!(alphabet.keyspace_size(0), 0);
        assert_eq!(alphabet.keyspace_size(2), 2 + 4);
        assert_eq!(alphabet.keyspace_size(3), 2 + 4 + 8);
    }

    #[test]
    fn test_generate_prefixes_zero_length() {
        let alphabet = Alphabet::new("abc").unwrap();
        assert_eq!(generate_prefixes(&alphabet, 0), vec![String::new()]);
    }

    #[test]
    fn test_generate_prefixes_lexicographic() {
        let alphabet = Alphabet::new("ab").unwrap();
        let prefixes = generate_prefixes(&alphabet, 2);
        assert_eq!(prefixes, vec!["aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_generate_prefixes_count() {
        let alphabet = Alphabet::new("abc").unwrap();
        assert_eq!(generate_prefixes(&alphabet, 3).len(), 27);
    }

    #[test]
    fn test_partition_round_robin_positions() {
        let prefixes: Vec<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let groups = partition_round_robin(prefixes, 2).unwrap();
        assert_eq!(groups[0], vec!["a", "c", "e"]);
        assert_eq!(groups[1], vec!["b", "d"]);
    }

    #[test]
    fn test_partition_sizes_differ_by_at_most_one() {
        let alphabet = Alphabet::new("abcde").unwrap();
        let prefixes = generate_prefixes(&alphabet, 2);
        for workers in 1..=7 {
            let groups = partition_round_robin(prefixes.clone(), workers).unwrap();
            assert_eq!(groups.len(), workers);
            let min = groups.iter().map(Vec::len).min().unwrap();
            let max = groups.iter().map(Vec::len).max().unwrap();
            assert!(max - min <= 1, "workers={}: {} vs {}", workers, min, max);
            let total: usize = groups.iter().map(Vec::len).sum();
            assert_eq!(total, prefixes.len());
        }
    }

    #[test]
    fn test_partition_more_workers_than_prefixes() {
        let groups = partition_round_robin(vec!["a".to_string()], 4).unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0], vec!["a"]);
        assert!(groups[1..].iter().all(Vec::is_empty));
    }

    #[test]
    fn test_partition_rejects_zero_workers() {
        assert_eq!(
            partition_round_robin(vec![], 0),
            Err(ConfigError::NoWorkers)
        );
    }
}
