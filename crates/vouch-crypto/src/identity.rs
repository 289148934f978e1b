//! Identity public keys as they enter the fingerprint.
//!
//! Keys are Curve25519 public keys. The fingerprint never hashes a bare key:
//! it always hashes the serialized form, a one-byte key type followed by
//! the 32 key bytes.

use x25519_dalek::PublicKey;

use crate::error::CryptoError;

/// Key type byte for Curve25519 ("DJB") public keys.
pub const DJB_TYPE: u8 = 0x05;

/// Length of a raw Curve25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Prepend the key type byte to raw public key bytes.
///
/// # Panics
///
/// Panics if `raw` is empty. Key material is validated by the caller.
pub fn serialize_public_key(raw: &[u8]) -> Vec<u8> {
    assert!(!raw.is_empty(), "identity key must not be empty");
    let mut serialized = Vec::with_capacity(1 + raw.len());
    serialized.push(DJB_TYPE);
    serialized.extend_from_slice(raw);
    serialized
}

/// A peer's long-term Curve25519 identity public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityKey([u8; PUBLIC_KEY_LEN]);

impl std::fmt::Debug for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IdentityKey").field(&self.to_hex()).finish()
    }
}

impl IdentityKey {
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse either raw key bytes (32) or the serialized form (33, type-prefixed).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let raw = match bytes.len() {
            PUBLIC_KEY_LEN => bytes,
            len if len == PUBLIC_KEY_LEN + 1 => {
                if bytes[0] != DJB_TYPE {
                    return Err(CryptoError::InvalidKeyType(bytes[0]));
                }
                &bytes[1..]
            }
            actual => {
                return Err(CryptoError::InvalidKeyLength {
                    expected: PUBLIC_KEY_LEN,
                    actual,
                });
            }
        };
        let mut arr = [0u8; PUBLIC_KEY_LEN];
        arr.copy_from_slice(raw);
        Ok(Self(arr))
    }

    /// Parse a hex-encoded key in either accepted form.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(s.trim())
            .map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// The raw 32 key bytes, without type prefix.
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Type-prefixed form that is hashed into the fingerprint.
    pub fn serialize(&self) -> Vec<u8> {
        serialize_public_key(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<PublicKey> for IdentityKey {
    fn from(key: PublicKey) -> Self {
        Self(key.to_bytes())
    }
}

impl From<&PublicKey> for IdentityKey {
    fn from(key: &PublicKey) -> Self {
        Self(*key.as_bytes())
    }
}
