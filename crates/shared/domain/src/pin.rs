//! PIN hashing for employee credentials.
//!
//! Stored credentials are the lowercase hex SHA-256 digest of the PIN. The
//! digest is unsalted and computed in a single pass so that `pin_hash`
//! columns written by earlier clients keep matching. Login compares digests
//! inside the query itself, which rules out per-row salts.

use sha2::{Digest, Sha256};

/// Stateless PIN hasher.
///
/// Equal inputs always produce equal digests. Use [`PinHasher::hash`] when
/// storing a credential and [`PinHasher::matches`] (or a digest equality
/// filter) when checking one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinHasher;

impl PinHasher {
    /// Length in characters of an encoded digest.
    pub const DIGEST_LEN: usize = 64;

    /// Hash a PIN or password into its storable digest.
    pub fn hash(secret: &str) -> String {
        let digest = Sha256::digest(secret.as_bytes());
        hex::encode(digest)
    }

    /// Check a plain PIN against a stored digest.
    pub fn matches(secret: &str, digest: &str) -> bool {
        Self::hash(secret).eq_ignore_ascii_case(digest)
    }
}
