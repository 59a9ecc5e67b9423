// ── Runtime checker configuration ──
//
// These types describe *what* to check and *how* to reach the nodes. They
// never touch disk: the CLI builds a `CheckerConfig` from its profile and
// flags and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use zonewatch_api::{TlsMode, TransportConfig};

use crate::model::ChainId;

/// TLS verification strategy for LCD requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Public LCD endpoints use real certificates.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-hosted nodes with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for one checker run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// JSON snapshot exported from the zones database.
    pub snapshot_path: PathBuf,
    /// Restrict the run to these zones. Empty = every zone in the snapshot.
    pub zones: Vec<ChainId>,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `pagination.limit` sent to the LCD.
    pub page_limit: u32,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("snapshot.json"),
            zones: Vec::new(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            page_limit: zonewatch_api::lcd::client::DEFAULT_PAGE_LIMIT,
        }
    }
}

impl CheckerConfig {
    /// Transport settings for the LCD client.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
