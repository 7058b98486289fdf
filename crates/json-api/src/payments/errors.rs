//! Payment Errors

use salvo::http::StatusError;
use tracing::error;

use printshop_app::domain::payments::PaymentsServiceError;

pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::InvalidRequest(field) => {
            StatusError::bad_request().brief(format!("Missing required field: {field}"))
        }
        PaymentsServiceError::Secret(source) => {
            error!("failed to read gateway secret: {source}");

            StatusError::internal_server_error()
        }
        PaymentsServiceError::Verification(source) => {
            error!("failed to verify payment: {source}");

            StatusError::internal_server_error()
        }
    }
}
