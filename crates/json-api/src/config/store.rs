//! Storefront Config

use std::path::PathBuf;

use clap::Args;
use jiff::SignedDuration;
use printshop::{
    checkout::CheckoutPolicy,
    pricing::{PricingError, parse_amount, parse_currency},
};
use printshop_app::domain::carts::SessionLimits;

/// Catalog and checkout settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Poster catalog YAML file
    #[arg(long, env = "CATALOG_PATH", default_value = "fixtures/catalog.yml")]
    pub catalog_path: PathBuf,

    /// ISO 4217 code carts are priced in
    #[arg(long, env = "STORE_CURRENCY", default_value = "INR")]
    pub currency: String,

    /// Minimum cart subtotal required to check out, in major units
    #[arg(long, env = "MIN_ORDER_VALUE", default_value = "259")]
    pub min_order_value: String,

    /// Seconds a cart may sit untouched before it is dropped
    #[arg(long, env = "CART_IDLE_TIMEOUT_SECS", default_value_t = 86_400)]
    pub cart_idle_timeout_secs: u32,

    /// Most carts held open at once
    #[arg(long, env = "MAX_CARTS", default_value_t = 100_000)]
    pub max_carts: usize,
}

impl StoreConfig {
    /// Build the checkout policy from the configured currency and minimum.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported currency or a malformed amount.
    pub fn checkout_policy(&self) -> Result<CheckoutPolicy, PricingError> {
        let currency = parse_currency(&self.currency)?;

        Ok(CheckoutPolicy::new(parse_amount(
            &self.min_order_value,
            currency,
        )?))
    }

    /// Bounds for the in-memory cart store.
    #[must_use]
    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            idle_timeout: SignedDuration::from_secs(i64::from(self.cart_idle_timeout_secs)),
            max_sessions: self.max_carts,
        }
    }
}
