//! Scannable (machine-compared) safety-number payload.
//!
//! The payload carries the scannable protocol version and the first 32 bytes
//! of each digest, encoded as a `CombinedFingerprints` protobuf message.
//! Turning the bytes into an image is left to a [`ScannableRenderer`].

use prost::Message;
use vouch_proto::v1::{CombinedFingerprints, LogicalFingerprint};

use crate::digest::FingerprintDigest;
use crate::error::CryptoError;

/// Digest bytes carried per side in the scannable payload.
pub const SCANNABLE_DIGEST_LEN: usize = 32;

/// A truncated digest as carried on the wire.
pub type DigestPrefix = [u8; SCANNABLE_DIGEST_LEN];

/// Renders encoded payload bytes into a scannable image (e.g. a QR code).
pub trait ScannableRenderer {
    type Image;
    type Error: std::fmt::Display;

    fn render(&self, payload: &[u8]) -> Result<Self::Image, Self::Error>;
}

/// Decoded scannable payload.
///
/// `local_digest` is the sender's own digest and `remote_digest` is the
/// sender's digest of its peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannablePayload {
    pub version: u32,
    pub local_digest: DigestPrefix,
    pub remote_digest: DigestPrefix,
}

impl ScannablePayload {
    pub fn new(version: u32, local: &FingerprintDigest, remote: &FingerprintDigest) -> Self {
        Self {
            version,
            local_digest: digest_prefix(local),
            remote_digest: digest_prefix(remote),
        }
    }

    pub fn to_proto(&self) -> CombinedFingerprints {
        CombinedFingerprints {
            version: Some(self.version),
            local_fingerprint: Some(LogicalFingerprint {
                content: Some(self.local_digest.to_vec()),
            }),
            remote_fingerprint: Some(LogicalFingerprint {
                content: Some(self.remote_digest.to_vec()),
            }),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }

    /// Decode untrusted scanned bytes.
    ///
    /// A missing version decodes as `0`, which always compares as an older
    /// version. Missing or wrongly sized digests are errors.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let combined = CombinedFingerprints::decode(bytes)?;
        Ok(Self {
            version: combined.version.unwrap_or(0),
            local_digest: logical_content(combined.local_fingerprint, "local fingerprint")?,
            remote_digest: logical_content(combined.remote_fingerprint, "remote fingerprint")?,
        })
    }
}

/// First [`SCANNABLE_DIGEST_LEN`] bytes of a digest.
pub fn digest_prefix(digest: &FingerprintDigest) -> DigestPrefix {
    let mut prefix = [0u8; SCANNABLE_DIGEST_LEN];
    prefix.copy_from_slice(&digest[..SCANNABLE_DIGEST_LEN]);
    prefix
}

fn logical_content(
    field: Option<LogicalFingerprint>,
    name: &'static str,
) -> Result<DigestPrefix, CryptoError> {
    let content = field
        .and_then(|f| f.content)
        .ok_or(CryptoError::MissingField(name))?;
    DigestPrefix::try_from(content.as_slice()).map_err(|_| CryptoError::InvalidDigestLength {
        expected: SCANNABLE_DIGEST_LEN,
        actual: content.len(),
    })
}
