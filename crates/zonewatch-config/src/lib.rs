//! Configuration for zonewatch.
//!
//! TOML profiles merged over built-in defaults and `ZONEWATCH_*` env vars,
//! and translation to `zonewatch_core::CheckerConfig`. The CLI layers its
//! flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use zonewatch_core::{ChainId, CheckerConfig, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named check profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Profile names, sorted.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    /// Output format: text, json, json-compact or yaml.
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Page size requested from the LCD.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
            page_limit: default_page_limit(),
        }
    }
}

fn default_output() -> String {
    "text".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_page_limit() -> u32 {
    100
}

/// A named check profile: which snapshot to read and how to reach nodes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// JSON snapshot exported from the zones database.
    pub snapshot: PathBuf,

    /// Restrict checks to these chain ids. Empty checks every zone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<String>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "zonewatch", "zonewatch").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("zonewatch");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from a specific file + environment. A missing file yields
/// the defaults.
///
/// Nested keys use a double underscore, e.g. `ZONEWATCH_DEFAULTS__PAGE_LIMIT`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ZONEWATCH_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile translation ─────────────────────────────────────────────

/// Build a `CheckerConfig` from a profile and the global defaults, with no
/// CLI flag overrides.
pub fn profile_to_checker_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<CheckerConfig, ConfigError> {
    if profile.snapshot.as_os_str().is_empty() {
        return Err(ConfigError::Validation {
            field: "snapshot".into(),
            reason: "snapshot path cannot be empty".into(),
        });
    }
    if defaults.page_limit == 0 {
        return Err(ConfigError::Validation {
            field: "page_limit".into(),
            reason: "must be at least 1".into(),
        });
    }

    let zones = parse_zones(&profile.zones)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(CheckerConfig {
        snapshot_path: profile.snapshot.clone(),
        zones,
        tls,
        timeout,
        page_limit: defaults.page_limit,
    })
}

/// Trim and validate chain ids from a zone filter.
pub fn parse_zones<S: AsRef<str>>(raw: &[S]) -> Result<Vec<ChainId>, ConfigError> {
    raw.iter()
        .map(|z| {
            let z = z.as_ref().trim();
            if z.is_empty() {
                Err(ConfigError::Validation {
                    field: "zones".into(),
                    reason: "chain id cannot be empty".into(),
                })
            } else {
                Ok(ChainId::new(z))
            }
        })
        .collect()
}
