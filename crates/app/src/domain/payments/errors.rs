//! Payments service errors.

use printshop::verification::VerificationError;
use thiserror::Error;

use crate::secrets::SecretStoreError;

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    #[error("invalid payment callback: missing {0}")]
    InvalidRequest(&'static str),

    #[error("gateway secret unavailable")]
    Secret(#[from] SecretStoreError),

    #[error("payment could not be verified")]
    Verification(#[source] VerificationError),
}

impl From<VerificationError> for PaymentsServiceError {
    fn from(error: VerificationError) -> Self {
        match error {
            VerificationError::InvalidRequest(field) => Self::InvalidRequest(field),
            VerificationError::EmptySecret => Self::Verification(error),
        }
    }
}
