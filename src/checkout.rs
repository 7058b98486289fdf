//! Checkout gating

use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Default minimum order value, in minor units (259.00).
pub const MINIMUM_ORDER_VALUE: i64 = 259_00;

/// Rules a cart must satisfy before checkout is permitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutPolicy {
    minimum_order_value: Money<'static, Currency>,
}

impl CheckoutPolicy {
    /// Create a policy with the given minimum order value. Its currency is the
    /// currency carts governed by this policy are priced in.
    pub fn new(minimum_order_value: Money<'static, Currency>) -> Self {
        Self {
            minimum_order_value,
        }
    }

    /// Minimum subtotal required to check out.
    pub fn minimum_order_value(&self) -> &Money<'static, Currency> {
        &self.minimum_order_value
    }

    /// Currency of the storefront.
    pub fn currency(&self) -> &'static Currency {
        self.minimum_order_value.currency()
    }

    /// Whether a cart with these totals may proceed to checkout.
    pub fn permits(&self, subtotal_minor: i64, item_count: u64) -> bool {
        item_count > 0 && subtotal_minor >= self.minimum_order_value.to_minor_units()
    }

    /// Amount still missing before `subtotal_minor` reaches the minimum.
    pub fn shortfall(&self, subtotal_minor: i64) -> Money<'static, Currency> {
        let missing = self
            .minimum_order_value
            .to_minor_units()
            .saturating_sub(subtotal_minor)
            .max(0);

        Money::from_minor(missing, self.currency())
    }
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self::new(Money::from_minor(MINIMUM_ORDER_VALUE, iso::INR))
    }
}

/// Snapshot of a cart's checkout readiness, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary<'a> {
    /// Sum of line totals.
    pub subtotal: Money<'a, Currency>,

    /// Sum of line quantities.
    pub item_count: u64,

    /// Minimum subtotal required.
    pub minimum_order_value: Money<'static, Currency>,

    /// Amount to add before checkout is permitted; zero once reached.
    pub shortfall: Money<'static, Currency>,

    /// Whether checkout is permitted.
    pub can_checkout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_259_inr() {
        let policy = CheckoutPolicy::default();

        assert_eq!(
            *policy.minimum_order_value(),
            Money::from_minor(259_00, iso::INR)
        );
        assert_eq!(policy.currency(), iso::INR);
    }

    #[test]
    fn permits_requires_items_and_minimum() {
        let policy = CheckoutPolicy::default();

        assert!(!policy.permits(1_000_00, 0), "empty carts never check out");
        assert!(!policy.permits(258_99, 3));
        assert!(policy.permits(259_00, 1));
    }

    #[test]
    fn shortfall_never_goes_negative() {
        let policy = CheckoutPolicy::default();

        assert_eq!(policy.shortfall(200_00), Money::from_minor(59_00, iso::INR));
        assert_eq!(policy.shortfall(500_00), Money::from_minor(0, iso::INR));
    }
}
