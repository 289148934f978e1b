//! Stable identity anchors for a verification session.
//!
//! A session is anchored either on a pair of account identifiers or on a
//! pair of canonical phone numbers. The variant decides both the bytes that
//! get mixed into each digest and the scannable protocol version.

use uuid::Uuid;

/// Scannable protocol version for phone-number anchored sessions.
pub const PHONE_NUMBER_VERSION: u32 = 1;

/// Scannable protocol version for account-identifier anchored sessions.
pub const IDENTIFIER_VERSION: u32 = 2;

/// Who the two parties of a verification session are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationSource {
    /// Both sides identified by their 16-byte account identifier.
    IdentityPair { mine: Uuid, theirs: Uuid },
    /// Both sides identified by a canonical (E.164) phone number.
    PhoneNumberPair { mine: String, theirs: String },
}

impl VerificationSource {
    pub const fn identity_pair(mine: Uuid, theirs: Uuid) -> Self {
        Self::IdentityPair { mine, theirs }
    }

    pub fn phone_number_pair(mine: impl Into<String>, theirs: impl Into<String>) -> Self {
        Self::PhoneNumberPair {
            mine: mine.into(),
            theirs: theirs.into(),
        }
    }

    /// Scannable protocol version implied by the anchor kind.
    pub const fn scannable_version(&self) -> u32 {
        match self {
            Self::IdentityPair { .. } => IDENTIFIER_VERSION,
            Self::PhoneNumberPair { .. } => PHONE_NUMBER_VERSION,
        }
    }

    /// Canonical `(mine, theirs)` bytes fed into the digest engine.
    ///
    /// Account identifiers contribute their raw 16 bytes; phone numbers
    /// contribute their UTF-8 encoding.
    pub fn stable_identifiers(&self) -> (&[u8], &[u8]) {
        match self {
            Self::IdentityPair { mine, theirs } => {
                (mine.as_bytes().as_slice(), theirs.as_bytes().as_slice())
            }
            Self::PhoneNumberPair { mine, theirs } => (mine.as_bytes(), theirs.as_bytes()),
        }
    }

    /// The same session as seen from the other party.
    #[must_use]
    pub fn swapped(&self) -> Self {
        match self {
            Self::IdentityPair { mine, theirs } => Self::IdentityPair {
                mine: *theirs,
                theirs: *mine,
            },
            Self::PhoneNumberPair { mine, theirs } => Self::PhoneNumberPair {
                mine: theirs.clone(),
                theirs: mine.clone(),
            },
        }
    }
}
