//! Payments service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    domain::payments::{
        errors::PaymentsServiceError,
        models::{PaymentCallback, PaymentOutcome},
    },
    secrets::SecretStore,
};

/// Verifies gateway callbacks with the merchant secret held in a [`SecretStore`].
#[derive(Clone)]
pub struct GatewayPaymentsService {
    secrets: Arc<dyn SecretStore>,
}

impl std::fmt::Debug for GatewayPaymentsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayPaymentsService").finish_non_exhaustive()
    }
}

impl GatewayPaymentsService {
    #[must_use]
    pub fn new(secrets: Arc<dyn SecretStore>) -> Self {
        Self { secrets }
    }
}

#[async_trait]
impl PaymentsService for GatewayPaymentsService {
    async fn verify_payment(
        &self,
        callback: PaymentCallback,
    ) -> Result<PaymentOutcome, PaymentsServiceError> {
        callback.validate()?;

        let secret = self.secrets.gateway_secret().await?;
        let verification = callback.verify(&secret)?;

        let outcome = PaymentOutcome::new(callback, verification.authentic);

        if outcome.authentic {
            info!(
                order_id = %outcome.order_id,
                payment_id = %outcome.payment_id,
                "payment confirmed"
            );
        } else {
            warn!(
                order_id = %outcome.order_id,
                payment_id = %outcome.payment_id,
                "payment signature rejected"
            );
        }

        Ok(outcome)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Check that a payment callback was signed by the gateway.
    ///
    /// A signature mismatch is a rejected outcome, not an error.
    async fn verify_payment(
        &self,
        callback: PaymentCallback,
    ) -> Result<PaymentOutcome, PaymentsServiceError>;
}
