//! NetBox client errors
//!
//! Non-success responses are classified by status code so callers can tell a
//! missing object from a rejected request or a failing server. The response
//! body is kept in the message because NetBox puts its field-level validation
//! errors there.

use thiserror::Error;

/// Errors that can occur when interacting with the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// Transport failure (connect, timeout, TLS) or unreadable response
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetBox answered with a status not covered by the variants below
    #[error("NetBox API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A JSON body could not be encoded, or did not match the expected model
    #[error("Malformed JSON body: {0}")]
    Decode(String),

    /// 401/403: missing, invalid or under-privileged token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400: NetBox rejected the request body or filters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 409: e.g. deleting an object that still has dependents
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl NetBoxError {
    /// Returns true when NetBox answered 404 for the requested object
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetBoxError::NotFound(_))
    }

    /// Status code of an unclassified API error
    pub fn status(&self) -> Option<u16> {
        match self {
            NetBoxError::Api { status, .. } => Some(*status),
            NetBoxError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
