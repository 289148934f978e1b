//! Fingerprint generation for a verification session.

use tracing::debug;

use crate::config::FingerprintConfig;
use crate::digest::{DEFAULT_ITERATIONS, derive_digest};
use crate::error::CryptoError;
use crate::fingerprint::Fingerprint;
use crate::identity::{IdentityKey, serialize_public_key};
use crate::source::VerificationSource;

/// Produces [`Fingerprint`]s with a fixed hash iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintGenerator {
    iterations: u32,
}

impl Default for FingerprintGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl FingerprintGenerator {
    /// # Panics
    ///
    /// Panics if `iterations` is zero.
    pub const fn new(iterations: u32) -> Self {
        assert!(iterations > 0, "hash iterations must be positive");
        Self { iterations }
    }

    pub fn from_config(config: &FingerprintConfig) -> Result<Self, CryptoError> {
        if config.hash_iterations == 0 {
            return Err(CryptoError::Config(
                "hash_iterations must be greater than zero".into(),
            ));
        }
        Ok(Self::new(config.hash_iterations))
    }

    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive both digests for a session.
    ///
    /// `my_key` and `their_key` are raw public key bytes; the key type byte
    /// is prepended here and must not be added by the caller. The rounds run
    /// synchronously; offload to a blocking context if latency matters.
    ///
    /// # Panics
    ///
    /// Panics if either key is empty.
    pub fn generate(
        &self,
        source: &VerificationSource,
        my_key: &[u8],
        their_key: &[u8],
        their_name: impl Into<String>,
    ) -> Fingerprint {
        let (my_id, their_id) = source.stable_identifiers();
        let version = source.scannable_version();
        debug!(
            version,
            iterations = self.iterations,
            "deriving safety number digests"
        );

        let my_digest = derive_digest(my_id, &serialize_public_key(my_key), self.iterations);
        let their_digest =
            derive_digest(their_id, &serialize_public_key(their_key), self.iterations);

        Fingerprint::from_parts(
            my_digest,
            their_digest,
            their_name.into(),
            self.iterations,
            version,
        )
    }

    /// [`generate`](Self::generate) for parsed identity keys.
    pub fn generate_for(
        &self,
        source: &VerificationSource,
        my_key: &IdentityKey,
        their_key: &IdentityKey,
        their_name: impl Into<String>,
    ) -> Fingerprint {
        self.generate(source, my_key.as_bytes(), their_key.as_bytes(), their_name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::digest::DIGEST_LEN;

    const ITERATIONS: u32 = 64;

    fn phone_source() -> VerificationSource {
        VerificationSource::phone_number_pair("+14152222222", "+14153333333")
    }

    #[test]
    fn default_uses_5200_iterations() {
        assert_eq!(FingerprintGenerator::default().iterations(), 5200);
    }

    #[test]
    fn generate_is_deterministic() {
        let generator = FingerprintGenerator::new(ITERATIONS);
        let a = generator.generate(&phone_source(), &[1; 32], &[2; 32], "Bob");
        let b = generator.generate(&phone_source(), &[1; 32], &[2; 32], "Bob");
        assert_eq!(a, b);
    }

    #[test]
    fn digests_are_full_length_and_distinct() {
        let generator = FingerprintGenerator::new(ITERATIONS);
        let fp = generator.generate(&phone_source(), &[1; 32], &[2; 32], "Bob");
        assert_eq!(fp.my_digest().len(), DIGEST_LEN);
        assert_eq!(fp.their_digest().len(), DIGEST_LEN);
        assert_ne!(fp.my_digest(), fp.their_digest());
    }

    #[test]
    fn key_is_prefixed_before_hashing() {
        let generator = FingerprintGenerator::new(ITERATIONS);
        let fp = generator.generate(&phone_source(), &[1; 32], &[2; 32], "Bob");
        let expected = derive_digest(b"+14152222222", &serialize_public_key(&[1; 32]), ITERATIONS);
        let unprefixed = derive_digest(b"+14152222222", &[1; 32], ITERATIONS);
        assert_eq!(fp.my_digest(), &expected);
        assert_ne!(fp.my_digest(), &unprefixed);
    }

    #[test]
    fn different_iterations_give_different_digests() {
        let a = FingerprintGenerator::new(ITERATIONS)
            .generate(&phone_source(), &[1; 32], &[2; 32], "Bob");
        let b = FingerprintGenerator::new(ITERATIONS + 1)
            .generate(&phone_source(), &[1; 32], &[2; 32], "Bob");
        assert_ne!(a.my_digest(), b.my_digest());
        assert_eq!(b.hash_iterations(), ITERATIONS + 1);
    }

    #[test]
    fn version_follows_source() {
        let generator = FingerprintGenerator::new(ITERATIONS);
        let phone = generator.generate(&phone_source(), &[1; 32], &[2; 32], "Bob");
        let uuid = generator.generate(
            &VerificationSource::identity_pair(Uuid::new_v4(), Uuid::new_v4()),
            &[1; 32],
            &[2; 32],
            "Bob",
        );
        assert_eq!(phone.version(), 1);
        assert_eq!(uuid.version(), 2);
        assert_eq!(uuid.their_name(), "Bob");
    }

    #[test]
    fn generate_for_matches_raw_generate() {
        let generator = FingerprintGenerator::new(ITERATIONS);
        let mine = IdentityKey::from_bytes([3; 32]);
        let theirs = IdentityKey::from_bytes([4; 32]);
        assert_eq!(
            generator.generate_for(&phone_source(), &mine, &theirs, "Bob"),
            generator.generate(&phone_source(), &[3; 32], &[4; 32], "Bob")
        );
    }

    #[test]
    fn from_config_rejects_zero_iterations() {
        let config = FingerprintConfig { hash_iterations: 0 };
        assert!(matches!(
            FingerprintGenerator::from_config(&config),
            Err(CryptoError::Config(_))
        ));
        let config = FingerprintConfig { hash_iterations: 10 };
        let generator = FingerprintGenerator::from_config(&config).unwrap();
        assert_eq!(generator.iterations(), 10);
    }

    #[test]
    #[should_panic(expected = "identity key must not be empty")]
    fn empty_key_panics() {
        let _ = FingerprintGenerator::new(ITERATIONS)
            .generate(&phone_source(), &[], &[2; 32], "Bob");
    }
}
