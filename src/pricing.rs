//! Pricing

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Errors that can occur while parsing or combining prices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The amount could not be parsed, was negative, or had too many decimals.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// The ISO currency code is not supported by the storefront.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Multiplying or summing minor units overflowed.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// Resolve a supported ISO 4217 currency code.
///
/// # Errors
///
/// Returns [`PricingError::UnknownCurrency`] for any other code.
pub fn parse_currency(code: &str) -> Result<&'static Currency, PricingError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "INR" => Ok(iso::INR),
        "GBP" => Ok(iso::GBP),
        "USD" => Ok(iso::USD),
        "EUR" => Ok(iso::EUR),
        _ => Err(PricingError::UnknownCurrency(code.to_string())),
    }
}

/// Parse a decimal amount in major units (e.g. `"149.50"`) into money.
///
/// # Errors
///
/// Returns [`PricingError::InvalidPrice`] if the amount is not a
/// non-negative decimal with at most two fractional digits.
pub fn parse_amount(
    amount: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let invalid = || PricingError::InvalidPrice(amount.to_string());

    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| invalid())?;

    if value.is_sign_negative() || value.scale() > 2 {
        return Err(invalid());
    }

    let minor_units = value
        .checked_mul(Decimal::new(100, 0))
        .and_then(|minor| minor.to_i64())
        .ok_or_else(invalid)?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Price of `quantity` units at `unit_price`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the total does not fit in minor units.
pub fn line_total<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .map(|minor| Money::from_minor(minor, unit_price.currency()))
        .ok_or(PricingError::Overflow)
}
