//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    checkout::{CheckoutPolicy, CheckoutSummary},
    posters::{PosterId, PosterSize},
    pricing::{PricingError, line_total},
};

/// Errors raised by cart mutations. A failed mutation leaves the cart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantities must be at least one; use `remove_line` to drop a line.
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    /// No line exists for the poster and size.
    #[error("no cart line for poster {0} in size {1}")]
    LineNotFound(PosterId, PosterSize),

    /// The unit price currency differs from the cart currency (price currency, cart currency).
    #[error("price has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// Quantities or totals no longer fit their numeric range.
    #[error("cart totals overflowed")]
    Overflow,

    /// A line price could not be combined into the totals.
    #[error("cart line could not be priced")]
    Pricing(#[source] PricingError),
}

impl From<PricingError> for CartError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::Overflow => Self::Overflow,
            other @ (PricingError::InvalidPrice(_) | PricingError::UnknownCurrency(_)) => {
                Self::Pricing(other)
            }
        }
    }
}

/// One poster, in one size, in some quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    poster_id: PosterId,
    size: PosterSize,
    quantity: u32,
    unit_price: Money<'a, Currency>,
}

impl<'a> CartLine<'a> {
    /// The poster on this line.
    pub fn poster_id(&self) -> &PosterId {
        &self.poster_id
    }

    /// The printed size.
    pub fn size(&self) -> PosterSize {
        self.size
    }

    /// Number of prints.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of a single print.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Quantity × unit price.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if the product overflows.
    pub fn total(&self) -> Result<Money<'a, Currency>, PricingError> {
        line_total(&self.unit_price, self.quantity)
    }

    fn matches(&self, poster_id: &PosterId, size: PosterSize) -> bool {
        self.poster_id == *poster_id && self.size == size
    }
}

/// A browsing session's cart.
///
/// Lines keep insertion order. Subtotal and item count are recomputed from
/// the lines on every mutation and only committed together with them.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    policy: CheckoutPolicy,
    subtotal_minor: i64,
    item_count: u64,
}

impl<'a> Cart<'a> {
    /// Create an empty cart governed by `policy`, priced in the policy's currency.
    pub fn new(policy: CheckoutPolicy) -> Self {
        Cart {
            lines: Vec::new(),
            policy,
            subtotal_minor: 0,
            item_count: 0,
        }
    }

    /// Add `quantity` prints of a poster, merging into an existing line with
    /// the same poster and size. A merged line takes the latest unit price.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::CurrencyMismatch`]: `unit_price` is not in the cart currency.
    /// - [`CartError::Overflow`]: the new totals do not fit.
    pub fn add_line(
        &mut self,
        poster_id: PosterId,
        size: PosterSize,
        quantity: u32,
        unit_price: Money<'a, Currency>,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.ensure_currency(&unit_price)?;

        let mut lines = self.lines.clone();

        match lines.iter_mut().find(|line| line.matches(&poster_id, size)) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::Overflow)?;
                line.unit_price = unit_price;
            }
            None => lines.push(CartLine {
                poster_id,
                size,
                quantity,
                unit_price,
            }),
        }

        self.commit(lines)
    }

    /// Remove the line for a poster and size, returning it. Absent lines are
    /// not an error.
    pub fn remove_line(&mut self, poster_id: &PosterId, size: PosterSize) -> Option<CartLine<'a>> {
        let index = self
            .lines
            .iter()
            .position(|line| line.matches(poster_id, size))?;

        let mut lines = self.lines.clone();
        let removed = lines.remove(index);

        // Removing a line can only shrink totals, so this cannot fail.
        self.commit(lines).ok().map(|()| removed)
    }

    /// Replace the quantity of an existing line.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::LineNotFound`]: no line for the poster and size.
    /// - [`CartError::Overflow`]: the new totals do not fit.
    pub fn update_quantity(
        &mut self,
        poster_id: &PosterId,
        size: PosterSize,
        quantity: u32,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut lines = self.lines.clone();

        let line = lines
            .iter_mut()
            .find(|line| line.matches(poster_id, size))
            .ok_or_else(|| CartError::LineNotFound(poster_id.clone(), size))?;

        line.quantity = quantity;

        self.commit(lines)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.subtotal_minor = 0;
        self.item_count = 0;
    }

    /// Sum of quantity × unit price over all lines.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        Money::from_minor(self.subtotal_minor, self.currency())
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Whether the cart holds items worth at least the minimum order value.
    pub fn can_checkout(&self) -> bool {
        self.policy.permits(self.subtotal_minor, self.item_count)
    }

    /// Totals and checkout readiness, for display.
    pub fn checkout_summary(&self) -> CheckoutSummary<'a> {
        CheckoutSummary {
            subtotal: self.subtotal(),
            item_count: self.item_count,
            minimum_order_value: *self.policy.minimum_order_value(),
            shortfall: self.policy.shortfall(self.subtotal_minor),
            can_checkout: self.can_checkout(),
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Find the line for a poster and size.
    pub fn line(&self, poster_id: &PosterId, size: PosterSize) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.matches(poster_id, size))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> &'static Currency {
        self.policy.currency()
    }

    /// The checkout rules this cart is gated by.
    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    fn ensure_currency(&self, price: &Money<'a, Currency>) -> Result<(), CartError> {
        let currency = self.currency();

        if price.currency() == currency {
            Ok(())
        } else {
            Err(CartError::CurrencyMismatch(
                price.currency().iso_alpha_code,
                currency.iso_alpha_code,
            ))
        }
    }

    fn commit(&mut self, lines: Vec<CartLine<'a>>) -> Result<(), CartError> {
        let (subtotal_minor, item_count) = totals(&lines)?;

        self.lines = lines;
        self.subtotal_minor = subtotal_minor;
        self.item_count = item_count;

        Ok(())
    }
}

fn totals(lines: &[CartLine<'_>]) -> Result<(i64, u64), CartError> {
    lines.iter().try_fold((0_i64, 0_u64), |(subtotal, count), line| {
        let line_minor = line.total()?.to_minor_units();

        Ok((
            subtotal.checked_add(line_minor).ok_or(CartError::Overflow)?,
            count
                .checked_add(u64::from(line.quantity))
                .ok_or(CartError::Overflow)?,
        ))
    })
}
