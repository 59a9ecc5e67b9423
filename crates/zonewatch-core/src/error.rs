// ── Core error types ──
//
// Errors raised while checking zones. Per-zone failures (`Fetch`,
// `NoEndpointAvailable`, per-zone `Store`) are caught by the checker and
// turn into skipped zones; only a failure to list zones ends a run.

use thiserror::Error;

use crate::model::ChainId;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Per-zone verification errors ─────────────────────────────────
    #[error("Failed to fetch IBC data of {zone} from {endpoint}: {reason}")]
    Fetch {
        zone: ChainId,
        endpoint: String,
        reason: String,
    },

    #[error("No live LCD endpoint known for {zone}")]
    NoEndpointAvailable { zone: ChainId },

    // ── Storage errors ───────────────────────────────────────────────
    #[error("Store error: {message}")]
    Store { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a fetch error for one zone/endpoint pair.
    pub fn fetch(zone: &ChainId, endpoint: &url::Url, err: &zonewatch_api::Error) -> Self {
        Self::Fetch {
            zone: zone.clone(),
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        }
    }

    /// Returns `true` if the zone could not be verified against its node,
    /// as opposed to a storage or configuration problem.
    pub fn is_unverifiable(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::NoEndpointAvailable { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────
//
// Query failures never come through here: the fetcher turns them into
// `Fetch` for the zone being checked. What is left is client setup.

impl From<zonewatch_api::Error> for CoreError {
    fn from(err: zonewatch_api::Error) -> Self {
        match err {
            zonewatch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            zonewatch_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            other => CoreError::Internal(format!("LCD query outside a zone check: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_errors_become_config_errors() {
        let err = CoreError::from(zonewatch_api::Error::Tls("bad pem".into()));
        assert!(matches!(err, CoreError::Config { ref message } if message.contains("bad pem")));
    }

    #[test]
    fn query_errors_outside_a_fetch_are_internal() {
        let err = CoreError::from(zonewatch_api::Error::Http {
            status: 502,
            message: "bad gateway".into(),
        });
        assert!(matches!(err, CoreError::Internal(ref message) if message.contains("HTTP 502")));
    }

    #[test]
    fn fetch_and_missing_endpoint_are_unverifiable() {
        let zone = ChainId::from("cosmoshub-4");
        assert!(CoreError::NoEndpointAvailable { zone: zone.clone() }.is_unverifiable());
        assert!(
            CoreError::Fetch {
                zone,
                endpoint: "https://lcd.example/".into(),
                reason: "HTTP 502".into(),
            }
            .is_unverifiable()
        );
        assert!(
            !CoreError::Store {
                message: "unreadable".into()
            }
            .is_unverifiable()
        );
    }
}
