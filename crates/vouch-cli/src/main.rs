//! Vouch CLI
//!
//! Computes safety numbers, exports scannable payloads, and compares a
//! scanned payload against locally held identity keys.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use vouch_cli::tracing_init::{bootstrap_subscriber, default_filter, init_tracing};
use vouch_cli::verify_cmd::{self, VerifyAction};
use vouch_crypto::{FingerprintGenerator, load_config};

#[derive(Parser, Debug)]
#[command(name = "vouch")]
#[command(version, about = "Safety-number verification for identity keys", long_about = None)]
struct Cli {
    /// Config file layered over the global settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hash rounds per side (overrides config). Both parties must agree.
    #[arg(long, global = true)]
    iterations: Option<u32>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    action: VerifyAction,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Config loading may warn about ignored env values before the
    // configured subscriber exists.
    let bootstrap = bootstrap_subscriber(cli.log_json);
    let mut config =
        tracing::dispatcher::with_default(&bootstrap, || load_config(cli.config.as_deref()))?;
    if let Some(iterations) = cli.iterations {
        config.fingerprint.hash_iterations = iterations;
    }
    config.validate()?;

    init_tracing(
        &default_filter(&config.log.level),
        cli.log_json || config.log.json,
    );
    debug!(version = env!("CARGO_PKG_VERSION"), ?config, "Starting vouch");

    let generator = FingerprintGenerator::from_config(&config.fingerprint)?;
    let mut stdout = io::stdout().lock();
    match verify_cmd::run(&cli.action, &generator, &mut stdout) {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::from(2)),
        Err(e) => {
            error!(error = %e, "command failed");
            Err(e)
        }
    }
}
