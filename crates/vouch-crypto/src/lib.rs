//! `Vouch` safety numbers
//!
//! Lets two parties confirm out of band that each holds the other's real
//! identity key.
//!
//! ## Pipeline
//!
//! - **Source**: the session's stable identifiers (account IDs or phone numbers)
//! - **Digest**: 5200 rounds of SHA-512 over `version || key || id`, per side
//! - **Display**: 60 digits in 12 groups, ordered so both sides see the same text
//! - **Scannable**: protobuf payload of truncated digests plus protocol version
//! - **Matcher**: classifies a scanned payload as match, version skew, or mismatch

pub mod config;
pub mod digest;
pub mod displayable;
pub mod error;
pub mod fingerprint;
pub mod generator;
pub mod identity;
pub mod matcher;
pub mod scannable;
pub mod source;

pub use config::{FingerprintConfig, VouchConfig, load_config};
pub use digest::{DEFAULT_ITERATIONS, DIGEST_LEN, FingerprintDigest, derive_digest};
pub use displayable::DisplayableFingerprint;
pub use error::CryptoError;
pub use fingerprint::Fingerprint;
pub use generator::FingerprintGenerator;
pub use identity::{DJB_TYPE, IdentityKey, serialize_public_key};
pub use matcher::{MatchResult, MismatchReason, match_payload};
pub use scannable::{SCANNABLE_DIGEST_LEN, ScannablePayload, ScannableRenderer};
pub use source::{IDENTIFIER_VERSION, PHONE_NUMBER_VERSION, VerificationSource};
