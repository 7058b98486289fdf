//! Storefront application services: catalog browsing, cart sessions and
//! payment verification.

pub mod context;
pub mod domain;
pub mod secrets;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
