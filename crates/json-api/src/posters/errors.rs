//! Poster Errors

use salvo::http::StatusError;

use printshop_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Poster not found"),
    }
}
