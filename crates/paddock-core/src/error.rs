// ── Core error types ──
//
// User-facing errors from paddock-core. Consumers see the backend's
// message text, never a raw reqwest or serde error. The
// `From<paddock_api::Error>` impl translates transport-layer failures
// into these variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Backend request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// The backend rejected the request. `message` is exactly what the
    /// REST client extracted from the response.
    #[error("{message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// HTTP status of a backend rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the entity is missing, locally or on the backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. }) || self.status() == Some(404)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<paddock_api::Error> for CoreError {
    fn from(err: paddock_api::Error) -> Self {
        match err {
            paddock_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    // Refined by the facility, which knows the configured timeout.
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() || e.is_request() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: paddock_api::error::NETWORK_ERROR_MESSAGE.into(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            paddock_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            paddock_api::Error::InvalidBaseUrl(url) => CoreError::Config {
                message: format!("Invalid backend URL: {url}"),
            },
            paddock_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            paddock_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            paddock_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Unexpected response from backend: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_rejection_keeps_backend_message() {
        let err: CoreError = paddock_api::Error::Api {
            status: 400,
            message: "Missing required fields: name".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Missing required fields: name");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
    }

    #[test]
    fn backend_404_counts_as_not_found() {
        let err: CoreError = paddock_api::Error::Api {
            status: 404,
            message: "Animal not found".into(),
        }
        .into();
        assert!(err.is_not_found());
    }
}
