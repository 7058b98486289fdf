//! Payment Handlers

pub(crate) mod verify;
