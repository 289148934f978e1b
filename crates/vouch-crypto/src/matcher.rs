//! Classification of a scanned peer payload against a local fingerprint.

use subtle::ConstantTimeEq;

use crate::fingerprint::Fingerprint;
use crate::scannable::{ScannablePayload, digest_prefix};

/// Which side's key database disagrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchReason {
    /// The key I hold for the peer is not the one they hold for themselves.
    WrongKeyForThem,
    /// The key the peer holds for me is not my current key.
    TheyHaveWrongKeyForMe,
}

impl MismatchReason {
    /// User-facing guidance naming the other party.
    pub fn describe(self, their_name: &str) -> String {
        match self {
            Self::WrongKeyForThem => format!(
                "Your safety number with {their_name} doesn't match. \
                 You may have the wrong key for {their_name}; refresh their keys and verify again."
            ),
            Self::TheyHaveWrongKeyForMe => format!(
                "Your safety number with {their_name} doesn't match. \
                 {their_name} may have the wrong key for you; ask them to refresh and verify again."
            ),
        }
    }
}

/// Outcome of comparing a scanned payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Match,
    /// The peer speaks an older scannable protocol version.
    TheyHaveOldVersion,
    /// The peer speaks a newer scannable protocol version.
    WeHaveOldVersion,
    NoMatch(MismatchReason),
}

impl MatchResult {
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }

    /// User-facing guidance for this outcome.
    pub fn describe(self, fingerprint: &Fingerprint) -> String {
        let name = fingerprint.their_name();
        match self {
            Self::Match => format!("Your safety number with {name} matches."),
            Self::TheyHaveOldVersion => format!(
                "{name} is using an older version. Ask them to update, then verify again."
            ),
            Self::WeHaveOldVersion => format!(
                "{name} is using a newer version. Update, then verify again."
            ),
            Self::NoMatch(reason) => reason.describe(name),
        }
    }
}

/// Compare a peer payload against the local fingerprint.
///
/// The peer's `local` digest is its own digest, which I hold as
/// `their_digest`; its `remote` digest is its view of me, which I hold as
/// `my_digest`. Digest prefixes are compared in constant time.
pub fn match_payload(local: &Fingerprint, peer: &ScannablePayload) -> MatchResult {
    if peer.version < local.version() {
        return MatchResult::TheyHaveOldVersion;
    }
    if peer.version > local.version() {
        return MatchResult::WeHaveOldVersion;
    }

    let their_prefix = digest_prefix(local.their_digest());
    if !bool::from(peer.local_digest[..].ct_eq(&their_prefix[..])) {
        return MatchResult::NoMatch(MismatchReason::WrongKeyForThem);
    }

    let my_prefix = digest_prefix(local.my_digest());
    if !bool::from(peer.remote_digest[..].ct_eq(&my_prefix[..])) {
        return MatchResult::NoMatch(MismatchReason::TheyHaveWrongKeyForMe);
    }

    MatchResult::Match
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::DIGEST_LEN;

    const MINE: [u8; DIGEST_LEN] = [0x11; DIGEST_LEN];
    const THEIRS: [u8; DIGEST_LEN] = [0x22; DIGEST_LEN];

    fn local(version: u32) -> Fingerprint {
        Fingerprint::from_parts(MINE, THEIRS, "Bob".into(), 5200, version)
    }

    /// What the peer would export for the same session.
    fn peer_payload(version: u32) -> ScannablePayload {
        ScannablePayload::new(version, &THEIRS, &MINE)
    }

    #[test]
    fn matching_payload() {
        assert_eq!(match_payload(&local(2), &peer_payload(2)), MatchResult::Match);
    }

    #[test]
    fn older_peer_version() {
        assert_eq!(
            match_payload(&local(2), &peer_payload(1)),
            MatchResult::TheyHaveOldVersion
        );
    }

    #[test]
    fn newer_peer_version() {
        assert_eq!(
            match_payload(&local(1), &peer_payload(2)),
            MatchResult::WeHaveOldVersion
        );
    }

    #[test]
    fn version_checked_before_digests() {
        let garbage = ScannablePayload {
            version: 1,
            local_digest: [0; 32],
            remote_digest: [0; 32],
        };
        assert_eq!(
            match_payload(&local(2), &garbage),
            MatchResult::TheyHaveOldVersion
        );
    }

    #[test]
    fn wrong_key_for_them() {
        let mut payload = peer_payload(2);
        payload.local_digest[5] ^= 1;
        assert_eq!(
            match_payload(&local(2), &payload),
            MatchResult::NoMatch(MismatchReason::WrongKeyForThem)
        );
    }

    #[test]
    fn they_have_wrong_key_for_me() {
        let mut payload = peer_payload(2);
        payload.remote_digest[31] ^= 0x80;
        assert_eq!(
            match_payload(&local(2), &payload),
            MatchResult::NoMatch(MismatchReason::TheyHaveWrongKeyForMe)
        );
    }

    #[test]
    fn both_wrong_reports_my_side_first() {
        let payload = ScannablePayload::new(2, &MINE, &THEIRS);
        assert_eq!(
            match_payload(&local(2), &payload),
            MatchResult::NoMatch(MismatchReason::WrongKeyForThem)
        );
    }

    #[test]
    fn own_payload_does_not_match_itself() {
        let fp = local(2);
        assert!(!match_payload(&fp, &fp.scannable()).is_match());
    }

    #[test]
    fn descriptions_name_the_peer() {
        let fp = local(2);
        for result in [
            MatchResult::Match,
            MatchResult::TheyHaveOldVersion,
            MatchResult::WeHaveOldVersion,
            MatchResult::NoMatch(MismatchReason::WrongKeyForThem),
            MatchResult::NoMatch(MismatchReason::TheyHaveWrongKeyForMe),
        ] {
            assert!(result.describe(&fp).contains("Bob"), "{result:?}");
        }
        assert_ne!(
            MismatchReason::WrongKeyForThem.describe("Bob"),
            MismatchReason::TheyHaveWrongKeyForMe.describe("Bob")
        );
    }
}
