// ── Core error types ──
//
// Errors surfaced by resource and data source operations. Consumers never
// see raw HTTP failures: the `From<cloudplane_api::Error>` impl translates
// transport-layer errors into provider-level variants, and every lifecycle
// operation wraps its failure once with the resource type and phase.

use strum::{AsRefStr, Display};
use thiserror::Error;

/// Lifecycle phase an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Create,
    Read,
    Update,
    Delete,
    Import,
    Validate,
    Configure,
}

/// Stable classification of a [`CoreError`], independent of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum ErrorKind {
    MissingResponse,
    MissingState,
    MissingIdentifier,
    TypeAssertionFailed,
    NilModel,
    InvalidImportFormat,
    RemoteNotFound,
    Validation,
    Api,
    Wait,
    Timeout,
    Cancelled,
    Authentication,
    Config,
    Internal,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Mapping / building contract violations ───────────────────────
    #[error("Response is missing: nothing to map into state")]
    MissingResponse,

    #[error("State is missing: nothing to map the response into")]
    MissingState,

    #[error("Could not resolve {attribute} from state or response")]
    MissingIdentifier { attribute: &'static str },

    #[error("Unexpected value type: {message}")]
    TypeAssertionFailed { message: String },

    #[error("Model is missing: cannot build request payload")]
    NilModel,

    // ── User input ───────────────────────────────────────────────────
    #[error("Invalid import identifier {input:?}: expected \"{expected}\" with non-empty parts")]
    InvalidImportFormat { input: String, expected: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    // ── Remote ───────────────────────────────────────────────────────
    #[error("Remote resource not found: {message}")]
    RemoteNotFound { message: String },

    #[error("API error: {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: Option<u16>,
    },

    #[error("Wait failed: {message}")]
    Wait { message: String },

    #[error("Timed out after {timeout_secs}s waiting for {what}")]
    Timeout { what: String, timeout_secs: u64 },

    #[error("Request to {url} timed out")]
    RequestTimeout { url: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),

    // ── Context wrapper ──────────────────────────────────────────────
    #[error("{resource} {phase}: {source}")]
    Operation {
        resource: String,
        phase: Phase,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Classification of this error, looking through the operation wrapper.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingResponse => ErrorKind::MissingResponse,
            Self::MissingState => ErrorKind::MissingState,
            Self::MissingIdentifier { .. } => ErrorKind::MissingIdentifier,
            Self::TypeAssertionFailed { .. } => ErrorKind::TypeAssertionFailed,
            Self::NilModel => ErrorKind::NilModel,
            Self::InvalidImportFormat { .. } => ErrorKind::InvalidImportFormat,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RemoteNotFound { .. } => ErrorKind::RemoteNotFound,
            Self::Api { .. } => ErrorKind::Api,
            Self::Wait { .. } => ErrorKind::Wait,
            Self::Timeout { .. } | Self::RequestTimeout { .. } => ErrorKind::Timeout,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Config { .. } => ErrorKind::Config,
            Self::Internal(_) => ErrorKind::Internal,
            Self::Operation { source, .. } => source.kind(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::RemoteNotFound
    }

    /// Attach resource and phase context. Already-wrapped errors are
    /// returned unchanged.
    #[must_use]
    pub fn in_operation(self, resource: &str, phase: Phase) -> Self {
        match self {
            Self::Operation { .. } => self,
            other => Self::Operation {
                resource: resource.to_owned(),
                phase,
                source: Box::new(other),
            },
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn type_assertion(message: impl Into<String>) -> Self {
        Self::TypeAssertionFailed {
            message: message.into(),
        }
    }
}

/// `map_err` adapter that wraps an error with operation context.
pub(crate) fn in_operation(resource: &'static str, phase: Phase) -> impl FnOnce(CoreError) -> CoreError {
    move |err| err.in_operation(resource, phase)
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<cloudplane_api::Error> for CoreError {
    fn from(err: cloudplane_api::Error) -> Self {
        if err.is_not_found() {
            return CoreError::RemoteNotFound {
                message: err.to_string(),
            };
        }
        match err {
            cloudplane_api::Error::Unauthorized => CoreError::Authentication {
                message: "service account token rejected".into(),
            },
            cloudplane_api::Error::Authentication { message } => {
                CoreError::Authentication { message }
            }
            cloudplane_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::RequestTimeout {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            cloudplane_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            cloudplane_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            cloudplane_api::Error::Api {
                message,
                code,
                status,
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            cloudplane_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
            cloudplane_api::Error::WaitTimeout { what, timeout_secs } => {
                CoreError::Timeout { what, timeout_secs }
            }
            e @ cloudplane_api::Error::WaitFailed { .. } => CoreError::Wait {
                message: e.to_string(),
            },
            cloudplane_api::Error::Cancelled => CoreError::Cancelled,
        }
    }
}
