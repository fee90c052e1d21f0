//! Client error model.
//!
//! Every variant displays as a message fit for the person at the console:
//! backend failures carry the body's `message` when there is one and the
//! calling operation's default message otherwise.

use thiserror::Error;

use ecclesia_auth::AuthzError;
use ecclesia_core::DomainError;

use crate::token_store::StoreError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body could not be read or did not have the expected shape.
    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("token storage failed: {0}")]
    Storage(#[from] StoreError),

    /// Rejected locally before sending.
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Forbidden(#[from] AuthzError),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// The `message` string of a JSON error body, if present.
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_comes_from_json_string_field() {
        let body = br#"{"error":"conflict","message":"CPF already registered"}"#;
        assert_eq!(error_message(body).as_deref(), Some("CPF already registered"));
    }

    #[test]
    fn non_string_or_missing_messages_are_ignored() {
        assert!(error_message(br#"{"message": 42}"#).is_none());
        assert!(error_message(br#"{"error":"boom"}"#).is_none());
        assert!(error_message(b"<html>502</html>").is_none());
        assert!(error_message(b"").is_none());
    }

    #[test]
    fn api_errors_display_their_message() {
        let err = ClientError::Api {
            status: 404,
            message: "Member not found".into(),
        };
        assert_eq!(err.to_string(), "Member not found");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unauthorized());
    }
}
