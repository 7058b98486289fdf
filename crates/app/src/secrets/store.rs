//! Secret store seam.

use async_trait::async_trait;
use mockall::automock;
use printshop::verification::GatewaySecret;

use crate::secrets::SecretStoreError;

#[automock]
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the payment gateway's merchant secret.
    async fn gateway_secret(&self) -> Result<GatewaySecret, SecretStoreError>;
}
