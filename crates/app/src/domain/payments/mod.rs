//! Payments

pub mod errors;
pub mod models;
mod service;

pub use errors::PaymentsServiceError;
pub use service::*;
