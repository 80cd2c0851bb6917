//! The digest collaborator: a deterministic, side-effect-free function
//! from candidate text to a fixed-length code.
//!
//! The engine treats the digest as a black box and charges every call
//! equally; swapping in a different scheme is a matter of implementing
//! [`Digest`]. Closures implement it automatically, which is what the
//! tests use.

use sha2::{Digest as _, Sha256};

/// A deterministic text-to-code function.
pub trait Digest: Send + Sync {
    /// Compute the fixed-length code for `text`.
    fn digest(&self, text: &str) -> String;
}

impl<F> Digest for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn digest(&self, text: &str) -> String {
        self(text)
    }
}

/// SHA-256 with lower-case hex output, the scheme used by the CLI demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl Digest for Sha256Digest {
    fn digest(&self, text: &str) -> String {
        hex::encode(Sha256::digest(text.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_value() {
        // sha256("abc"), the FIPS 180-2 test vector
        assert_eq!(
            Sha256Digest.digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_deterministic() {
        assert_eq!(Sha256Digest.digest("s3c"), Sha256Digest.digest("s3c"));
        assert_ne!(Sha256Digest.digest("s3c"), Sha256Digest.digest("s3d"));
    }

    #[test]
    fn test_closure_is_a_digest() {
        let identity = |s: &str| s.to_string();
        assert_eq!(identity.digest("xy"), "xy");
    }
}
