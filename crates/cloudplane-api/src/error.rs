use thiserror::Error;

/// Top-level error type for the `cloudplane-api` crate.
///
/// Covers every failure mode across the API surfaces:
/// transport, DNS, IaaS (stable and alpha), and asynchronous waits.
/// `cloudplane-core` maps these into provider diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token rejected by the API (HTTP 401).
    #[error("Unauthorized -- service account token rejected")]
    Unauthorized,

    /// The token could not be turned into a header value.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Structured error from any of the REST APIs.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Waiting ─────────────────────────────────────────────────────
    /// The resource did not reach a terminal status in time.
    #[error("Timed out after {timeout_secs}s waiting for {what}")]
    WaitTimeout { what: String, timeout_secs: u64 },

    /// The resource reached a terminal failure status.
    #[error("{what} reached failure status {status}{}", detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    WaitFailed {
        what: String,
        status: String,
        detail: Option<String>,
    },

    /// The wait was cancelled by the caller.
    #[error("Operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` if the remote resource does not exist (HTTP 404 or 410).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => matches!(
                e.status(),
                Some(reqwest::StatusCode::NOT_FOUND | reqwest::StatusCode::GONE)
            ),
            Self::Api { status, .. } => matches!(status, 404 | 410),
            _ => false,
        }
    }

    /// Returns `true` for gateway-level failures the wait handler may ride out.
    pub fn is_temporary(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Extract the API error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> Error {
        Error::Api {
            message: "boom".into(),
            code: None,
            status,
        }
    }

    #[test]
    fn not_found_covers_404_and_410() {
        assert!(api(404).is_not_found());
        assert!(api(410).is_not_found());
        assert!(!api(400).is_not_found());
        assert!(!Error::Unauthorized.is_not_found());
    }

    #[test]
    fn gateway_errors_are_temporary() {
        assert!(api(502).is_temporary());
        assert!(api(503).is_temporary());
        assert!(api(504).is_temporary());
        assert!(!api(500).is_temporary());
        assert!(!api(404).is_temporary());
    }

    #[test]
    fn wait_failed_message_includes_detail() {
        let err = Error::WaitFailed {
            what: "zone abc".into(),
            status: "CREATE_FAILED".into(),
            detail: Some("quota exceeded".into()),
        };
        assert_eq!(
            err.to_string(),
            "zone abc reached failure status CREATE_FAILED: quota exceeded"
        );
    }
}
