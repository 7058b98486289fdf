//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("poster not found")]
    NotFound,
}
