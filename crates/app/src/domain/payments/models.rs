//! Payment Models

use printshop::verification::PaymentVerificationRequest;
use serde_json::{Map, Value};

/// Customer record sent along with a payment callback. Not interpreted.
pub type CustomerDetails = Map<String, Value>;

/// Payment callback as received from the storefront.
pub type PaymentCallback = PaymentVerificationRequest<CustomerDetails>;

/// Whether an order's payment may be fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Confirmed,
    Rejected,
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }
}

/// Result of checking a payment callback.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    pub order_id: String,
    pub payment_id: String,
    pub authentic: bool,
    pub status: PaymentStatus,
    pub customer_details: CustomerDetails,
}

impl PaymentOutcome {
    pub(crate) fn new(callback: PaymentCallback, authentic: bool) -> Self {
        let status = if authentic {
            PaymentStatus::Confirmed
        } else {
            PaymentStatus::Rejected
        };

        Self {
            order_id: callback.order_id,
            payment_id: callback.payment_id,
            authentic,
            status,
            customer_details: callback.customer_details,
        }
    }
}
