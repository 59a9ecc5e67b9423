//! CLI configuration -- thin wrapper around `zonewatch_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--snapshot, --zone, --timeout, --insecure, --ca-cert).

use clap::ValueEnum;

use zonewatch_core::CheckerConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use zonewatch_config::{Config, Profile, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Output format: flag > env > config default > text.
pub fn resolve_output(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global
        .output
        .or_else(|| OutputFormat::from_str(&config.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Text)
}

/// Build the checker configuration from the active profile plus flag
/// overrides.
///
/// An explicitly requested profile must exist. Without one, a missing
/// default profile is fine as long as `--snapshot` is given.
pub fn resolve_checker_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<CheckerConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    let mut profile = match config.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            let available = config.profile_names();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => Profile::default(),
    };

    // Flags win over the profile
    if let Some(ref snapshot) = global.snapshot {
        profile.snapshot.clone_from(snapshot);
    }
    if !global.zone.is_empty() {
        profile.zones.clone_from(&global.zone);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(ref ca_cert) = global.ca_cert {
        profile.ca_cert = Some(ca_cert.clone());
    }

    if profile.snapshot.as_os_str().is_empty() {
        return Err(CliError::NoSnapshot {
            path: config_path().display().to_string(),
        });
    }

    Ok(zonewatch_config::profile_to_checker_config(
        &profile,
        &config.defaults,
    )?)
}
