//! Configuration resolution for Vouch.
//!
//! Resolution order, lowest to highest priority:
//! 1. Built-in defaults
//! 2. Global config (~/.config/vouch/settings.json)
//! 3. Explicit config file (`--config`)
//! 4. Environment variables
//!
//! CLI flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::digest::DEFAULT_ITERATIONS;
use crate::error::CryptoError;

/// Complete Vouch configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VouchConfig {
    #[serde(default)]
    pub fingerprint: FingerprintConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Safety-number derivation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Hash rounds per side. Both parties must agree on this value.
    pub hash_iterations: u32,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            hash_iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl VouchConfig {
    pub fn validate(&self) -> Result<(), CryptoError> {
        if self.fingerprint.hash_iterations == 0 {
            return Err(CryptoError::Config(
                "fingerprint.hash_iterations must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration with hierarchical resolution.
pub fn load_config(explicit: Option<&Path>) -> Result<VouchConfig, CryptoError> {
    let mut layers = Vec::new();
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            layers.push(global_path);
        }
    }
    if let Some(path) = explicit {
        layers.push(path.to_path_buf());
    }

    resolve_config(&layers, |name| std::env::var(name).ok())
}

/// Layer config files over the defaults, then apply env overrides.
///
/// Files are merged key by key, so a later file only overrides the fields
/// it actually sets.
pub fn resolve_config(
    layers: &[PathBuf],
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<VouchConfig, CryptoError> {
    let mut merged = serde_json::to_value(VouchConfig::default())
        .map_err(|e| CryptoError::Config(format!("Failed to serialize defaults: {e}")))?;
    for path in layers {
        merge_value(&mut merged, read_config_value(path)?);
    }

    let mut config: VouchConfig = serde_json::from_value(merged)
        .map_err(|e| CryptoError::Config(format!("Invalid configuration: {e}")))?;
    apply_env_overrides(&mut config, lookup);
    config.validate()?;
    Ok(config)
}

/// Get the global config file path.
pub fn global_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|h| PathBuf::from(h).join(".vouch").join("settings.json"))
    }
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join("Library/Application Support/vouch/settings.json"))
    }
    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
            .map(|p| p.join("vouch").join("settings.json"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        None
    }
}

fn read_config_value(path: &Path) -> Result<serde_json::Value, CryptoError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CryptoError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        CryptoError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

/// Recursively overlay `overlay` onto `base`; non-object values replace.
fn merge_value(base: &mut serde_json::Value, overlay: serde_json::Value) {
    match (base, overlay) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Apply `VOUCH_*` overrides. Unparseable values are ignored.
fn apply_env_overrides(config: &mut VouchConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("VOUCH_HASH_ITERATIONS") {
        match val.parse() {
            Ok(n) => config.fingerprint.hash_iterations = n,
            Err(_) => warn!(value = %val, "ignoring invalid VOUCH_HASH_ITERATIONS"),
        }
    }
    if let Some(val) = lookup("VOUCH_LOG_LEVEL") {
        config.log.level = val;
    }
    if let Some(val) = lookup("VOUCH_LOG_JSON") {
        match val.parse() {
            Ok(json) => config.log.json = json,
            Err(_) => warn!(value = %val, "ignoring invalid VOUCH_LOG_JSON"),
        }
    }
}
