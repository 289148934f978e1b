//! A derived safety number for one verification session.

use tracing::{info, warn};

use crate::digest::FingerprintDigest;
use crate::displayable::DisplayableFingerprint;
use crate::error::CryptoError;
use crate::matcher::{MatchResult, match_payload};
use crate::scannable::{ScannablePayload, ScannableRenderer};

/// Both sides' digests for one session, plus the context needed to compare
/// them and to explain the result.
///
/// Built fresh from live key material by
/// [`FingerprintGenerator`](crate::FingerprintGenerator) and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Fingerprint {
    my_digest: FingerprintDigest,
    their_digest: FingerprintDigest,
    their_name: String,
    hash_iterations: u32,
    version: u32,
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fingerprint")
            .field("my_digest", &hex::encode(&self.my_digest[..8]))
            .field("their_digest", &hex::encode(&self.their_digest[..8]))
            .field("their_name", &self.their_name)
            .field("hash_iterations", &self.hash_iterations)
            .field("version", &self.version)
            .finish()
    }
}

impl Fingerprint {
    pub(crate) const fn from_parts(
        my_digest: FingerprintDigest,
        their_digest: FingerprintDigest,
        their_name: String,
        hash_iterations: u32,
        version: u32,
    ) -> Self {
        Self {
            my_digest,
            their_digest,
            their_name,
            hash_iterations,
            version,
        }
    }

    pub const fn my_digest(&self) -> &FingerprintDigest {
        &self.my_digest
    }

    pub const fn their_digest(&self) -> &FingerprintDigest {
        &self.their_digest
    }

    /// Display name of the other party, used when composing guidance text.
    pub fn their_name(&self) -> &str {
        &self.their_name
    }

    pub const fn hash_iterations(&self) -> u32 {
        self.hash_iterations
    }

    /// Scannable protocol version of this session.
    pub const fn version(&self) -> u32 {
        self.version
    }

    pub fn displayable(&self) -> DisplayableFingerprint {
        DisplayableFingerprint::new(&self.my_digest, &self.their_digest)
    }

    /// The formatted 3-line safety number for manual comparison.
    pub fn display_text(&self) -> String {
        self.displayable().to_string()
    }

    pub fn scannable(&self) -> ScannablePayload {
        ScannablePayload::new(self.version, &self.my_digest, &self.their_digest)
    }

    /// Wire bytes of the scannable payload, ready for rendering.
    pub fn scannable_bytes(&self) -> Vec<u8> {
        self.scannable().to_bytes()
    }

    /// Render the scannable payload with an external renderer.
    ///
    /// A renderer failure is returned as [`CryptoError::RenderFailed`] and is
    /// not retried.
    pub fn scannable_image<R: ScannableRenderer>(
        &self,
        renderer: &R,
    ) -> Result<R::Image, CryptoError> {
        renderer
            .render(&self.scannable_bytes())
            .map_err(|e| CryptoError::RenderFailed(e.to_string()))
    }

    /// Classify a decoded peer payload against this fingerprint.
    pub fn matches(&self, peer: &ScannablePayload) -> MatchResult {
        let result = match_payload(self, peer);
        if result == MatchResult::Match {
            info!(version = self.version, "scanned safety number matches");
        } else {
            warn!(
                ours = self.version,
                theirs = peer.version,
                ?result,
                "scanned safety number does not match"
            );
        }
        result
    }

    /// Decode scanned bytes and classify them.
    ///
    /// Decode failures are returned as errors, never folded into a match
    /// result.
    pub fn compare_scanned(&self, scanned: &[u8]) -> Result<MatchResult, CryptoError> {
        let peer = ScannablePayload::from_bytes(scanned).inspect_err(|e| {
            warn!(error = %e, len = scanned.len(), "failed to decode scanned safety number");
        })?;
        Ok(self.matches(&peer))
    }
}
