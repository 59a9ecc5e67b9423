//! Clap derive structures for the `zonewatch` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// zonewatch -- IBC topology drift checker for Cosmos zones
#[derive(Debug, Parser)]
#[command(
    name = "zonewatch",
    version,
    about = "Check stored IBC clients, connections and channels against live Cosmos nodes",
    long_about = "Reconciles the IBC topology recorded in a zones database snapshot with\n\
        what each zone's most advanced LCD node reports, and prints a\n\
        discrepancy report suitable for chat alerts.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "ZONEWATCH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Snapshot file exported from the zones database (overrides profile)
    #[arg(long, short = 's', env = "ZONEWATCH_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Only check these zones (repeatable or comma-separated)
    #[arg(long, short = 'z', value_delimiter = ',', global = true)]
    pub zone: Vec<String>,

    /// Output format [default: from config, else text]
    #[arg(long, short = 'o', env = "ZONEWATCH_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates from LCD nodes
    #[arg(long, short = 'k', env = "ZONEWATCH_INSECURE", global = true)]
    pub insecure: bool,

    /// Custom CA certificate for LCD nodes
    #[arg(long, global = true)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds [default: from config, else 30]
    #[arg(long, env = "ZONEWATCH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report / pretty table (default)
    Text,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one chain id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare every zone's stored IBC data with its live node
    #[command(alias = "c")]
    Check(CheckArgs),

    /// List zones in the snapshot with entity counts and selected endpoint
    #[command(alias = "z")]
    Zones,

    /// Manage zonewatch configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Check ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Exit with status 9 when discrepancies are found
    #[arg(long)]
    pub fail_on_drift: bool,

    /// Exit with status 7 when a zone could not be verified
    #[arg(long)]
    pub fail_on_skip: bool,

    /// Print the report even when nothing drifted
    #[arg(long)]
    pub always_report: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    SetDefault {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
