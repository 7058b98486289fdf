//! Money rendering

use rusty_money::{Money, iso::Currency};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// An amount of money
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MoneyResponse {
    /// Amount in minor units (e.g. paise)
    pub amount: i64,

    /// ISO 4217 currency code
    pub currency: String,
}

impl From<&Money<'_, Currency>> for MoneyResponse {
    fn from(money: &Money<'_, Currency>) -> Self {
        Self {
            amount: money.to_minor_units(),
            currency: money.currency().iso_alpha_code.to_string(),
        }
    }
}

impl From<Money<'_, Currency>> for MoneyResponse {
    fn from(money: Money<'_, Currency>) -> Self {
        Self::from(&money)
    }
}
