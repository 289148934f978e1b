//! Iterated SHA-512 fingerprint digests.
//!
//! Each side's digest binds a stable identifier to a serialized identity key:
//!
//! ```text
//! buffer = FORMAT_VERSION (u16 BE) || key || stable_id
//! repeat iterations: buffer = SHA-512(buffer || key)
//! ```
//!
//! Every round consumes the previous round's output, so the work cannot be
//! parallelized or cached. The iteration count is the brute-force cost.

use sha2::{Digest, Sha512};

/// Output length of one digest (SHA-512).
pub const DIGEST_LEN: usize = 64;

/// Fingerprint format version mixed into the first round.
pub const FORMAT_VERSION: u16 = 0;

/// Default number of hash rounds per side.
pub const DEFAULT_ITERATIONS: u32 = 5200;

/// A full-length fingerprint digest.
pub type FingerprintDigest = [u8; DIGEST_LEN];

/// Derive the digest for one side of a session.
///
/// `key` must already carry its type prefix (see
/// [`serialize_public_key`](crate::identity::serialize_public_key)).
///
/// # Panics
///
/// Panics if `key` is empty, if `iterations` is zero, or if the first-round
/// hash input would exceed `u32::MAX` bytes. All three are caller bugs.
pub fn derive_digest(stable_id: &[u8], key: &[u8], iterations: u32) -> FingerprintDigest {
    assert!(!key.is_empty(), "identity key must not be empty");
    assert!(iterations > 0, "hash iterations must be positive");

    let mut buffer = Vec::with_capacity(2 + key.len() + stable_id.len());
    buffer.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
    buffer.extend_from_slice(key);
    buffer.extend_from_slice(stable_id);
    assert!(
        u32::try_from(buffer.len() + key.len()).is_ok(),
        "hash input exceeds maximum length"
    );

    let mut digest = hash_round(&buffer, key);
    for _ in 1..iterations {
        digest = hash_round(&digest, key);
    }
    digest
}

/// One round: `SHA-512(buffer || key)`.
fn hash_round(buffer: &[u8], key: &[u8]) -> FingerprintDigest {
    let output = Sha512::new().chain_update(buffer).chain_update(key).finalize();
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&output);
    digest
}
