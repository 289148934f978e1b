//! Session arguments shared by every subcommand.

use anyhow::{Context, bail};
use uuid::Uuid;

use vouch_crypto::{IdentityKey, VerificationSource};

/// Who is verifying whom, and with which keys.
#[derive(clap::Args, Debug, Clone)]
pub struct SessionArgs {
    /// Your stable identifier: an account UUID or an E.164 phone number.
    #[arg(long)]
    pub my_id: String,

    /// Their stable identifier, of the same kind as --my-id.
    #[arg(long)]
    pub their_id: String,

    /// Your identity public key, hex (32 raw bytes or 33 type-prefixed).
    #[arg(long)]
    pub my_key: String,

    /// Their identity public key, hex (32 raw bytes or 33 type-prefixed).
    #[arg(long)]
    pub their_key: String,

    /// Display name used in guidance messages.
    #[arg(long, default_value = "your contact")]
    pub their_name: String,
}

impl SessionArgs {
    /// Both identifiers must be UUIDs, or both must be `+`-prefixed numbers.
    pub fn source(&self) -> anyhow::Result<VerificationSource> {
        match (Uuid::parse_str(&self.my_id), Uuid::parse_str(&self.their_id)) {
            (Ok(mine), Ok(theirs)) => Ok(VerificationSource::identity_pair(mine, theirs)),
            (Err(_), Err(_))
                if is_phone_number(&self.my_id) && is_phone_number(&self.their_id) =>
            {
                Ok(VerificationSource::phone_number_pair(
                    self.my_id.clone(),
                    self.their_id.clone(),
                ))
            }
            _ => bail!("--my-id and --their-id must both be UUIDs or both be E.164 phone numbers"),
        }
    }

    pub fn keys(&self) -> anyhow::Result<(IdentityKey, IdentityKey)> {
        let mine = IdentityKey::from_hex(&self.my_key).context("Invalid --my-key")?;
        let theirs = IdentityKey::from_hex(&self.their_key).context("Invalid --their-key")?;
        Ok((mine, theirs))
    }
}

fn is_phone_number(s: &str) -> bool {
    s.strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args(my_id: &str, their_id: &str) -> SessionArgs {
        SessionArgs {
            my_id: my_id.into(),
            their_id: their_id.into(),
            my_key: "11".repeat(32),
            their_key: format!("05{}", "22".repeat(32)),
            their_name: "Bob".into(),
        }
    }

    #[test]
    fn uuids_select_identity_pair() {
        let source = args(
            "00000000-0000-4000-8000-00000000000a",
            "00000000-0000-4000-8000-00000000000b",
        )
        .source()
        .unwrap();
        assert_eq!(source.scannable_version(), 2);
    }

    #[test]
    fn phone_numbers_select_phone_pair() {
        let source = args("+14152222222", "+14153333333").source().unwrap();
        assert_eq!(source.scannable_version(), 1);
    }

    #[test]
    fn mixed_identifiers_are_rejected() {
        assert!(
            args("+14152222222", "00000000-0000-4000-8000-00000000000b")
                .source()
                .is_err()
        );
        assert!(args("alice", "bob").source().is_err());
    }

    #[test]
    fn keys_accept_raw_and_prefixed_hex() {
        let (mine, theirs) = args("+1", "+2").keys().unwrap();
        assert_eq!(mine.as_bytes(), &[0x11; 32]);
        assert_eq!(theirs.as_bytes(), &[0x22; 32]);
    }

    #[test]
    fn bad_key_is_reported() {
        let mut bad = args("+1", "+2");
        bad.my_key = "zz".into();
        let err = bad.keys().unwrap_err();
        assert!(err.to_string().contains("--my-key"));
    }
}
