//! Carts

pub mod errors;
pub mod models;
mod service;
mod sessions;

pub use errors::CartsServiceError;
pub use service::*;
pub use sessions::{CartSessions, DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS, SessionLimits};
