use thiserror::Error;

use crate::normalize::{normalize, Failure};

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers branch on these, never on
// the human-readable message.

pub mod error_code {
    pub const TRANSPORT_FAILURE: &str = "TRANSPORT_FAILURE";
    pub const AUTHORIZATION_FAILURE: &str = "AUTHORIZATION_FAILURE";
    pub const MALFORMED_SESSION_RESPONSE: &str = "MALFORMED_SESSION_RESPONSE";
    pub const INVALID_CREDENTIAL: &str = "INVALID_CREDENTIAL";
    pub const MISSING_API_KEY: &str = "MISSING_API_KEY";
    pub const MISSING_INPUT: &str = "MISSING_INPUT";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
}

// ── ClientError ─────────────────────────────────────────────────────

/// The single error channel of the client.
///
/// `Display` is always the normalized, user-facing message, so stores can
/// record `err.to_string()` without further inspection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Network failure, timeout or non-2xx response. A 401/403 also lands
    /// here, after the transport has terminated the session.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// Login succeeded at HTTP level but the body lacks a credential or role.
    #[error("{0}")]
    MalformedSessionResponse(String),

    /// A credential could not be decoded into an identity.
    #[error("{0}")]
    InvalidCredential(String),

    /// A privileged call was attempted without its API key.
    #[error("{0}")]
    MissingApiKey(String),

    /// A required argument was empty; no request was issued.
    #[error("{0}")]
    MissingInput(String),

    /// Client-local persistence failed where it is not best-effort.
    #[error("{0}")]
    Storage(String),
}

impl ClientError {
    /// Build a transport error, normalizing the failure exactly once.
    pub fn from_failure(failure: &Failure) -> Self {
        ClientError::Transport {
            status: failure.status(),
            message: normalize(failure),
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// 401 or 403.
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport { .. } if self.is_authorization_failure() => {
                error_code::AUTHORIZATION_FAILURE
            }
            ClientError::Transport { .. } => error_code::TRANSPORT_FAILURE,
            ClientError::MalformedSessionResponse(_) => error_code::MALFORMED_SESSION_RESPONSE,
            ClientError::InvalidCredential(_) => error_code::INVALID_CREDENTIAL,
            ClientError::MissingApiKey(_) => error_code::MISSING_API_KEY,
            ClientError::MissingInput(_) => error_code::MISSING_INPUT,
            ClientError::Storage(_) => error_code::STORAGE_ERROR,
        }
    }
}

impl From<Failure> for ClientError {
    fn from(failure: Failure) -> Self {
        ClientError::from_failure(&failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_just_message() {
        let err = ClientError::Transport {
            status: Some(400),
            message: "seat capacity must be positive".into(),
        };
        assert_eq!(err.to_string(), "seat capacity must be positive");
        assert_eq!(
            ClientError::MissingApiKey("API key is required to add points".into()).to_string(),
            "API key is required to add points"
        );
    }

    #[test]
    fn from_failure_normalizes() {
        let err = ClientError::from(Failure::Response {
            status: 403,
            body: br#"{"message":"forbidden"}"#.to_vec(),
        });
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "forbidden");
        assert!(err.is_authorization_failure());
    }

    #[test]
    fn error_code_mapping() {
        let transport = |status| ClientError::Transport {
            status,
            message: "x".into(),
        };
        assert_eq!(transport(Some(500)).error_code(), "TRANSPORT_FAILURE");
        assert_eq!(transport(None).error_code(), "TRANSPORT_FAILURE");
        assert_eq!(transport(Some(401)).error_code(), "AUTHORIZATION_FAILURE");
        assert_eq!(transport(Some(403)).error_code(), "AUTHORIZATION_FAILURE");
        assert_eq!(
            ClientError::MalformedSessionResponse("x".into()).error_code(),
            "MALFORMED_SESSION_RESPONSE"
        );
        assert_eq!(
            ClientError::InvalidCredential("x".into()).error_code(),
            "INVALID_CREDENTIAL"
        );
        assert_eq!(ClientError::MissingApiKey("x".into()).error_code(), "MISSING_API_KEY");
        assert_eq!(ClientError::MissingInput("x".into()).error_code(), "MISSING_INPUT");
        assert_eq!(ClientError::Storage("x".into()).error_code(), "STORAGE_ERROR");
    }

    #[test]
    fn non_transport_has_no_status() {
        assert_eq!(ClientError::InvalidCredential("bad".into()).status(), None);
        assert!(!ClientError::InvalidCredential("bad".into()).is_authorization_failure());
    }
}
