//! Numeric safety-number text for manual comparison.
//!
//! Each digest contributes 30 digits: six 5-byte big-endian chunks, each
//! reduced modulo 100000 and zero-padded. The two 30-digit halves are
//! ordered lexicographically so both parties see the same 60 digits, shown
//! as 3 lines of 4 groups of 5.

use std::fmt::{self, Write};

use crate::digest::FingerprintDigest;

/// Bytes per displayed 5-digit group.
const CHUNK_LEN: usize = 5;
/// Groups contributed by each digest.
const CHUNKS_PER_DIGEST: usize = 6;
const GROUP_DIGITS: usize = 5;
const LINE_DIGITS: usize = 20;

/// Total digits in a safety number.
pub const DISPLAY_DIGITS: usize = 2 * CHUNKS_PER_DIGEST * GROUP_DIGITS;

/// Render one 5-byte chunk as a zero-padded 5-digit group.
pub fn encode_chunk(chunk: &[u8; CHUNK_LEN]) -> String {
    let mut wide = [0u8; 8];
    wide[8 - CHUNK_LEN..].copy_from_slice(chunk);
    format!("{:05}", u64::from_be_bytes(wide) % 100_000)
}

/// The 30-digit string contributed by one digest.
pub fn digest_digits(digest: &FingerprintDigest) -> String {
    let mut digits = String::with_capacity(CHUNKS_PER_DIGEST * GROUP_DIGITS);
    for i in 0..CHUNKS_PER_DIGEST {
        let mut chunk = [0u8; CHUNK_LEN];
        chunk.copy_from_slice(&digest[i * CHUNK_LEN..(i + 1) * CHUNK_LEN]);
        digits.push_str(&encode_chunk(&chunk));
    }
    digits
}

/// The canonically ordered 60-digit safety number.
///
/// `Display` yields the grouped three-line form; [`digits`](Self::digits)
/// yields the bare digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayableFingerprint {
    digits: String,
}

impl DisplayableFingerprint {
    pub fn new(local: &FingerprintDigest, remote: &FingerprintDigest) -> Self {
        let local = digest_digits(local);
        let remote = digest_digits(remote);
        let digits = if local <= remote {
            local + &remote
        } else {
            remote + &local
        };
        Self { digits }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for DisplayableFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.digits.chars().enumerate() {
            if i > 0 {
                if i % LINE_DIGITS == 0 {
                    f.write_char('\n')?;
                } else if i % GROUP_DIGITS == 0 {
                    f.write_char(' ')?;
                }
            }
            f.write_char(c)?;
        }
        Ok(())
    }
}
