// HTTP client construction for LCD queries.
//
// A check run talks to many nodes, one per zone, with the same TLS and
// timeout policy. The policy is resolved once into a `TransportConfig` and
// turned into a single `reqwest::Client` that every `LcdClient` clones.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// How LCD node certificates are verified.
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    /// Webpki roots. Public LCD gateways sit behind ordinary certificates.
    #[default]
    System,
    /// Trust an extra PEM root, for nodes behind a private CA.
    CustomCa(PathBuf),
    /// No verification. Only for operator-run nodes on self-signed certs.
    DangerAcceptInvalid,
}

/// TLS policy and per-request timeout shared by all LCD queries of a run.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    /// Applies to each page request, not to a whole paginated listing.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build the shared client. A CA file that is missing or not PEM fails
    /// here, before any zone is queried.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("zonewatch/", env!("CARGO_PKG_VERSION")));

        let builder = match &self.tls {
            TlsMode::System => builder,
            TlsMode::CustomCa(path) => {
                let pem = std::fs::read(path).map_err(|e| {
                    Error::Tls(format!("failed to read CA cert {}: {e}", path.display()))
                })?;
                let root = reqwest::Certificate::from_pem(&pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert {}: {e}", path.display())))?;
                builder.add_root_certificate(root)
            }
            TlsMode::DangerAcceptInvalid => builder.danger_accept_invalid_certs(true),
        };

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build LCD HTTP client: {e}")))
    }
}
