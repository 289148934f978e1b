//! Safety-number subcommands: number, payload, compare.
//!
//! User-facing output uses writeln! to the given writer (stdout in the
//! binary); diagnostics go through tracing.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use vouch_crypto::{Fingerprint, FingerprintGenerator, MatchResult};

use crate::session_args::SessionArgs;

/// Safety-number subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum VerifyAction {
    /// Print the 60-digit safety number for manual comparison.
    Number {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Print the scannable payload as hex.
    Payload {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Compare a scanned payload (hex) against the locally derived fingerprint.
    Compare {
        #[command(flatten)]
        session: SessionArgs,
        /// Payload scanned from the other device, hex-encoded.
        #[arg(long)]
        scanned: String,
    },
}

/// Execute a subcommand. Returns `false` when a comparison did not match.
pub fn run(
    action: &VerifyAction,
    generator: &FingerprintGenerator,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match action {
        VerifyAction::Number { session } => {
            let fingerprint = derive(session, generator)?;
            writeln!(out, "{}", fingerprint.display_text())?;
            Ok(true)
        }
        VerifyAction::Payload { session } => {
            let fingerprint = derive(session, generator)?;
            writeln!(out, "{}", hex::encode(fingerprint.scannable_bytes()))?;
            Ok(true)
        }
        VerifyAction::Compare { session, scanned } => {
            let fingerprint = derive(session, generator)?;
            let bytes = hex::decode(scanned.trim()).context("Scanned payload is not valid hex")?;
            let result = fingerprint
                .compare_scanned(&bytes)
                .context("Invalid safety number code")?;
            writeln!(out, "{}", result.describe(&fingerprint))?;
            Ok(result == MatchResult::Match)
        }
    }
}

fn derive(session: &SessionArgs, generator: &FingerprintGenerator) -> anyhow::Result<Fingerprint> {
    let source = session.source()?;
    let (mine, theirs) = session.keys()?;
    info!(
        version = source.scannable_version(),
        iterations = generator.iterations(),
        "computing safety number"
    );
    Ok(generator.generate_for(&source, &mine, &theirs, session.their_name.clone()))
}
