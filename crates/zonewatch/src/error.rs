//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use zonewatch_config::ConfigError;
use zonewatch_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONNECTION: i32 = 7;
    pub const DRIFT: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Check outcome ────────────────────────────────────────────────
    #[error("Discrepancies found in {zones} zone(s)")]
    #[diagnostic(
        code(zonewatch::drift),
        help("The report above lists every entity that differs between the database and IBC.")
    )]
    DriftDetected { zones: usize },

    #[error("{count} zone(s) could not be verified: {zones}")]
    #[diagnostic(
        code(zonewatch::unverified),
        help(
            "Check that the zones have a live LCD address in the snapshot and that the nodes\n\
             are reachable. Re-run with -v for per-zone details."
        )
    )]
    ZonesUnverified { count: usize, zones: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not set up the HTTP client: {reason}")]
    #[diagnostic(
        code(zonewatch::transport),
        help("Check --ca-cert / the profile's ca_cert, or use --insecure (-k) for self-signed nodes.")
    )]
    Transport { reason: String },

    // ── Snapshot store ───────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(zonewatch::store),
        help("Point --snapshot (-s) or the profile's `snapshot` at a valid JSON export.")
    )]
    Store { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(zonewatch::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(zonewatch::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: zonewatch config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No snapshot configured")]
    #[diagnostic(
        code(zonewatch::no_snapshot),
        help(
            "Pass --snapshot (-s), set ZONEWATCH_SNAPSHOT, or create a profile with: zonewatch config init\n\
             Config file: {path}"
        )
    )]
    NoSnapshot { path: String },

    #[error(transparent)]
    #[diagnostic(code(zonewatch::config))]
    Config(Box<figment::Error>),

    #[error("Failed to write configuration: {0}")]
    #[diagnostic(code(zonewatch::config_write))]
    ConfigWrite(String),

    #[error("{0}")]
    #[diagnostic(code(zonewatch::internal))]
    Internal(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(zonewatch::render))]
    Render(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DriftDetected { .. } => exit_code::DRIFT,
            Self::ZonesUnverified { .. } | Self::Transport { .. } => exit_code::CONNECTION,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::NoSnapshot { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Store { message } => CliError::Store { message },

            CoreError::Config { message } => CliError::Transport { reason: message },

            err @ (CoreError::Fetch { .. } | CoreError::NoEndpointAvailable { .. }) => {
                CliError::ZonesUnverified {
                    count: 1,
                    zones: err.to_string(),
                }
            }

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Serialization(e) => CliError::ConfigWrite(e.to_string()),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}
