//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reel/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::frames::GapPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub directory: Option<PathBuf>,
    pub prefix: Option<String>,
    pub gap_policy: Option<GapPolicy>,
    pub mirror_dir: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DIRECTORY: &str = "movie";
pub const DEFAULT_PREFIX: &str = "addition";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub gap_policy: GapPolicy,
    /// Where to copy the frame directory before loading. `None` skips the copy.
    pub mirror_dir: Option<PathBuf>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub directory: Option<PathBuf>,
    pub prefix: Option<String>,
    pub gap_policy: Option<GapPolicy>,
    pub mirror_dir: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.reel/`, where the config file and log live.
pub fn reel_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reel"))
}

/// Returns the path to `~/.reel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    reel_home().map(|dir| dir.join("config.toml"))
}

/// Load config from `~/.reel/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReelConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReelConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReelConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`], for an explicit path.
pub fn load_config_from(path: &Path) -> Result<ReelConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ReelConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ReelConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Reel Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# directory = "movie"        # Or set REEL_DIR; relative to the working directory
# prefix = "addition"        # Frames are read from <directory>/<prefix>_1, _2, ...
# gap_policy = "fail"        # "fail" or "blank" when an index in between is missing
# mirror_dir = "/tmp"        # Copy the frame directory here before loading
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ReelConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &ReelConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Directory: CLI → env → config → default
    let directory = cli
        .directory
        .clone()
        .or_else(|| env("REEL_DIR").map(PathBuf::from))
        .or_else(|| config.general.directory.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY));

    // Prefix: CLI → env → config → default
    let prefix = cli
        .prefix
        .clone()
        .or_else(|| env("REEL_PREFIX"))
        .or_else(|| config.general.prefix.clone())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

    // Gap policy: CLI → env → config → default. Unknown env values are ignored.
    let gap_policy = cli
        .gap_policy
        .or_else(|| env("REEL_GAPS").and_then(|v| parse_gap_policy(&v)))
        .or(config.general.gap_policy)
        .unwrap_or_default();

    // Mirror: CLI → env → config → off
    let mirror_dir = cli
        .mirror_dir
        .clone()
        .or_else(|| env("REEL_MIRROR_DIR").map(PathBuf::from))
        .or_else(|| config.general.mirror_dir.clone());

    ResolvedConfig {
        directory,
        prefix,
        gap_policy,
        mirror_dir,
    }
}

fn parse_gap_policy(value: &str) -> Option<GapPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "fail" => Some(GapPolicy::Fail),
        "blank" => Some(GapPolicy::Blank),
        other => {
            warn!("Ignoring unknown REEL_GAPS value {:?}", other);
            None
        }
    }
}
