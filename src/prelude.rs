//! Printshop prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError, Poster},
    checkout::{CheckoutPolicy, CheckoutSummary, MINIMUM_ORDER_VALUE},
    posters::{PosterId, PosterSize, UnknownSizeError},
    pricing::{PricingError, parse_amount, parse_currency},
    verification::{
        GatewaySecret, PaymentVerificationRequest, Verification, VerificationError, sign, verify,
    },
};
