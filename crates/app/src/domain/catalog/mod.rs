//! Catalog

pub mod errors;
mod service;

pub use errors::CatalogServiceError;
pub use service::*;
