//! App Context

use std::{path::Path, sync::Arc};

use printshop::{
    catalog::{Catalog, CatalogError},
    checkout::CheckoutPolicy,
};
use thiserror::Error;
use tracing::info;

use crate::{
    domain::{
        carts::{CartSessions, CartsService, InMemoryCartsService, SessionLimits},
        catalog::{CatalogService, InMemoryCatalogService},
        payments::{GatewayPaymentsService, PaymentsService},
    },
    secrets::{OpenBaoConfig, OpenBaoSecretStore, SecretStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog")]
    Catalog(#[from] CatalogError),

    #[error("catalog is priced in {catalog}, but the minimum order value is in {policy}")]
    CurrencyMismatch {
        catalog: &'static str,
        policy: &'static str,
    },
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub payments: Arc<dyn PaymentsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire the in-memory services around a loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the policy and catalog disagree on currency.
    pub fn new(
        catalog: Arc<Catalog>,
        policy: CheckoutPolicy,
        sessions: CartSessions,
        secrets: Arc<dyn SecretStore>,
    ) -> Result<Self, AppInitError> {
        if catalog.currency() != policy.currency() {
            return Err(AppInitError::CurrencyMismatch {
                catalog: catalog.currency().iso_alpha_code,
                policy: policy.currency().iso_alpha_code,
            });
        }

        Ok(Self {
            catalog: Arc::new(InMemoryCatalogService::new(Arc::clone(&catalog))),
            carts: Arc::new(InMemoryCartsService::new(catalog, policy, sessions)),
            payments: Arc::new(GatewayPaymentsService::new(secrets)),
        })
    }

    /// Build application context from a catalog file, reading the gateway
    /// secret from OpenBao.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be loaded or its currency
    /// differs from the policy's.
    pub fn from_catalog_file(
        path: impl AsRef<Path>,
        policy: CheckoutPolicy,
        limits: SessionLimits,
        openbao: OpenBaoConfig,
    ) -> Result<Self, AppInitError> {
        let catalog = Catalog::from_yaml_file(path.as_ref())?;

        info!(
            path = %path.as_ref().display(),
            posters = catalog.len(),
            currency = catalog.currency().iso_alpha_code,
            "catalog loaded"
        );

        Self::new(
            Arc::new(catalog),
            policy,
            CartSessions::with_limits(limits),
            Arc::new(OpenBaoSecretStore::new(openbao)),
        )
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use crate::{secrets::MockSecretStore, test::catalog};

    use super::*;

    #[test]
    fn policy_in_another_currency_is_rejected() {
        let policy = CheckoutPolicy::new(Money::from_minor(10_00, iso::GBP));

        let result = AppContext::new(
            catalog(),
            policy,
            CartSessions::new(),
            Arc::new(MockSecretStore::new()),
        );

        assert!(
            matches!(
                result,
                Err(AppInitError::CurrencyMismatch {
                    catalog: "INR",
                    policy: "GBP"
                })
            ),
            "expected CurrencyMismatch, got {result:?}"
        );
    }

    #[test]
    fn missing_catalog_file_is_reported() {
        let openbao = OpenBaoConfig {
            addr: "http://127.0.0.1:8200".to_string(),
            token: "token".to_string(),
            mount: "secret".to_string(),
            path: "printshop/gateway".to_string(),
            field: "key_secret".to_string(),
        };

        let result = AppContext::from_catalog_file(
            "/nonexistent/catalog.yml",
            CheckoutPolicy::default(),
            SessionLimits::default(),
            openbao,
        );

        assert!(matches!(result, Err(AppInitError::Catalog(CatalogError::Io(_)))));
    }
}
