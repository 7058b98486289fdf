//! Printshop
//!
//! Printshop is the checkout core of a poster-printing storefront: a priced
//! poster catalog, a session cart gated by a minimum order value, and
//! verification of payment gateway callback signatures.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod posters;
pub mod prelude;
pub mod pricing;
pub mod verification;
