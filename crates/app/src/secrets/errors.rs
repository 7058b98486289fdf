//! Secret store errors.

use thiserror::Error;

/// Errors that can occur while fetching secrets.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-2xx response or an unexpected body.
    #[error("unexpected response from secret store: {0}")]
    UnexpectedResponse(String),

    /// The secret exists but lacks the configured field, or the field is blank.
    #[error("secret field {0} is missing or empty")]
    MissingField(String),
}
