//! Cart request and response models.

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use printshop::{
    cart::CartLine,
    checkout::CheckoutSummary,
    posters::PosterSize,
    pricing::PricingError,
};
use printshop_app::domain::carts::models::CartSession;

use crate::{extensions::*, money::MoneyResponse};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The lines in the cart, in the order they were added
    pub lines: Vec<CartLineResponse>,

    /// Sum of line totals
    pub subtotal: MoneyResponse,

    /// Number of prints across all lines
    pub item_count: u64,

    /// Whether the cart meets the minimum order value
    pub can_checkout: bool,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl TryFrom<CartSession> for CartResponse {
    type Error = PricingError;

    fn try_from(session: CartSession) -> Result<Self, Self::Error> {
        let cart = session.cart;

        Ok(CartResponse {
            uuid: session.uuid.into(),
            lines: cart
                .lines()
                .iter()
                .map(CartLineResponse::try_from)
                .collect::<Result<_, _>>()?,
            subtotal: cart.subtotal().into(),
            item_count: cart.item_count(),
            can_checkout: cart.can_checkout(),
            created_at: session.created_at.to_string(),
            updated_at: session.updated_at.to_string(),
        })
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The poster on this line
    pub poster_id: String,

    /// Print size
    pub size: String,

    /// Number of prints
    pub quantity: u32,

    /// Price of a single print
    pub unit_price: MoneyResponse,

    /// Quantity times unit price
    pub total: MoneyResponse,
}

impl TryFrom<&CartLine<'_>> for CartLineResponse {
    type Error = PricingError;

    fn try_from(line: &CartLine<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            poster_id: line.poster_id().to_string(),
            size: line.size().to_string(),
            quantity: line.quantity(),
            unit_price: line.unit_price().into(),
            total: line.total()?.into(),
        })
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// Sum of line totals
    pub subtotal: MoneyResponse,

    /// Number of prints across all lines
    pub item_count: u64,

    /// Minimum subtotal required to check out
    pub minimum_order_value: MoneyResponse,

    /// Amount still to add before checkout is allowed
    pub shortfall: MoneyResponse,

    /// Whether checkout is allowed
    pub can_checkout: bool,
}

impl From<CheckoutSummary<'_>> for CheckoutResponse {
    fn from(summary: CheckoutSummary<'_>) -> Self {
        Self {
            subtotal: summary.subtotal.into(),
            item_count: summary.item_count,
            minimum_order_value: summary.minimum_order_value.into(),
            shortfall: summary.shortfall.into(),
            can_checkout: summary.can_checkout,
        }
    }
}

/// Render a cart session, logging if a line total no longer fits.
pub(crate) fn cart_response(session: CartSession) -> Result<CartResponse, StatusError> {
    CartResponse::try_from(session).or_500("failed to render cart")
}

/// Parse a print size from a request.
pub(crate) fn parse_size(size: &str) -> Result<PosterSize, StatusError> {
    size.parse::<PosterSize>()
        .or_400("Unknown poster size, expected one of A4, A3, A2, A1")
}

/// Parse a requested quantity. Anything below one is rejected.
pub(crate) fn parse_quantity(quantity: i64) -> Result<u32, StatusError> {
    if quantity <= 0 {
        return Err(StatusError::bad_request().brief("Quantity must be greater than zero"));
    }

    u32::try_from(quantity).or_400("Quantity is too large")
}
