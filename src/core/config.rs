//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bankease/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BankEaseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<String>,
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub holder_name: Option<String>,
    pub member_since: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaymentConfig {
    pub default_amount: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "bankease.log";
pub const DEFAULT_TICK_RATE_MS: u64 = 120;
pub const DEFAULT_HOLDER_NAME: &str = "Alex Thompson";
pub const DEFAULT_MEMBER_SINCE: &str = "June 2022";
pub const DEFAULT_PAYMENT_AMOUNT: f64 = 390.81;

/// Floor for the redraw tick; anything faster just burns CPU.
const MIN_TICK_RATE_MS: u64 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub tick_rate: Duration,
    pub holder_name: String,
    pub member_since: String,
    pub default_amount: f64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
            holder_name: DEFAULT_HOLDER_NAME.to_string(),
            member_since: DEFAULT_MEMBER_SINCE.to_string(),
            default_amount: DEFAULT_PAYMENT_AMOUNT,
        }
    }
}

/// CLI values that win over everything else. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
    pub holder_name: Option<String>,
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

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.bankease/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bankease").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from the default path.
///
/// A missing default file is generated from the template and treated as
/// empty. A missing explicit file is an I/O error. A malformed file
/// returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<BankEaseConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BankEaseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BankEaseConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<BankEaseConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BankEaseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# BankEase Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "bankease.log"          # Or set BANKEASE_LOG_FILE
# tick_rate_ms = 120                 # Redraw interval for animations

# [profile]
# holder_name = "Alex Thompson"      # Or set BANKEASE_HOLDER_NAME
# member_since = "June 2022"

# [payment]
# default_amount = 390.81
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
pub fn resolve(config: &BankEaseConfig, cli: &CliOverrides) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            std::env::var("BANKEASE_LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .or(config.general.log_level)
        .unwrap_or(defaults.log_level);

    // Log file: env → config → default
    let log_file = std::env::var("BANKEASE_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .unwrap_or(defaults.log_file);

    // Holder name: CLI → env → config → default
    let holder_name = cli
        .holder_name
        .clone()
        .or_else(|| std::env::var("BANKEASE_HOLDER_NAME").ok())
        .or_else(|| config.profile.holder_name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(defaults.holder_name);

    let tick_rate = config
        .general
        .tick_rate_ms
        .map(|ms| Duration::from_millis(ms.max(MIN_TICK_RATE_MS)))
        .unwrap_or(defaults.tick_rate);

    let default_amount = match config.payment.default_amount {
        Some(amount) if amount.is_finite() && amount > 0.0 => amount,
        Some(amount) => {
            warn!("Ignoring non-positive default payment amount {}", amount);
            defaults.default_amount
        }
        None => defaults.default_amount,
    };

    ResolvedConfig {
        log_level,
        log_file,
        tick_rate,
        holder_name,
        member_since: config
            .profile
            .member_since
            .clone()
            .unwrap_or(defaults.member_since),
        default_amount,
    }
}
