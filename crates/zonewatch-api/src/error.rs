use thiserror::Error;

/// Top-level error type for the `zonewatch-api` crate.
///
/// Covers every failure mode of an LCD query: transport, HTTP status,
/// Cosmos error bodies and payload decoding. `zonewatch-core` maps these
/// into per-zone fetch failures.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── LCD ─────────────────────────────────────────────────────────
    /// Non-success HTTP status without a recognizable Cosmos error body.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Structured gRPC-gateway error (`{"code": N, "message": "..."}`).
    #[error("LCD error {code}: {message}")]
    Lcd { code: i64, message: String },

    /// The node handed back a `next_key` it already returned.
    #[error("Pagination loop detected at key {key}")]
    PaginationLoop { key: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying later.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Http { status: 404, .. } => true,
            // gRPC NotFound
            Self::Lcd { code: 5, .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        let err = Error::Http {
            status: 503,
            message: "unavailable".into(),
        };
        assert!(err.is_transient());
        assert!(!err.is_not_found());
    }

    #[test]
    fn grpc_not_found_is_not_found() {
        let err = Error::Lcd {
            code: 5,
            message: "client not found".into(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }
}
