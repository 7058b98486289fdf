//! OpenBao KV v2 client for the payment gateway secret.

use async_trait::async_trait;
use clap::Args;
use printshop::verification::GatewaySecret;
use reqwest::Client;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::secrets::{SecretStore, SecretStoreError};

/// Configuration for reading a secret from an OpenBao instance.
#[derive(Clone)]
pub struct OpenBaoConfig {
    /// OpenBao server address, e.g. `"http://localhost:8200"`.
    pub addr: String,

    /// Vault/OpenBao authentication token.
    pub token: String,

    /// KV v2 mount, e.g. `"secret"`.
    pub mount: String,

    /// Secret path below the mount, e.g. `"printshop/gateway"`.
    pub path: String,

    /// Field of the secret holding the merchant key.
    pub field: String,
}

impl std::fmt::Debug for OpenBaoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenBaoConfig")
            .field("addr", &self.addr)
            .field("token", &"**redacted**")
            .field("mount", &self.mount)
            .field("path", &self.path)
            .field("field", &self.field)
            .finish()
    }
}

impl Drop for OpenBaoConfig {
    fn drop(&mut self) {
        self.token.zeroize();
    }
}

/// Command line and environment settings for the gateway secret location.
#[derive(Args)]
pub struct OpenBaoArgs {
    /// `OpenBao` server address
    #[arg(long, env = "OPENBAO_ADDR")]
    pub openbao_addr: String,

    /// `OpenBao` authentication token
    #[arg(long, env = "OPENBAO_TOKEN", hide_env_values = true)]
    pub openbao_token: String,

    /// KV v2 mount holding the gateway secret
    #[arg(long, env = "OPENBAO_KV_MOUNT", default_value = "secret")]
    pub openbao_kv_mount: String,

    /// Secret path below the mount
    #[arg(
        long,
        env = "OPENBAO_GATEWAY_SECRET_PATH",
        default_value = "printshop/gateway"
    )]
    pub openbao_gateway_secret_path: String,

    /// Field of the secret holding the merchant key
    #[arg(
        long,
        env = "OPENBAO_GATEWAY_SECRET_FIELD",
        default_value = "key_secret"
    )]
    pub openbao_gateway_secret_field: String,
}

impl std::fmt::Debug for OpenBaoArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenBaoArgs")
            .field("openbao_addr", &self.openbao_addr)
            .field("openbao_token", &"**redacted**")
            .field("openbao_kv_mount", &self.openbao_kv_mount)
            .field("openbao_gateway_secret_path", &self.openbao_gateway_secret_path)
            .field("openbao_gateway_secret_field", &self.openbao_gateway_secret_field)
            .finish()
    }
}

impl From<&OpenBaoArgs> for OpenBaoConfig {
    fn from(args: &OpenBaoArgs) -> Self {
        Self {
            addr: args.openbao_addr.clone(),
            token: args.openbao_token.clone(),
            mount: args.openbao_kv_mount.clone(),
            path: args.openbao_gateway_secret_path.clone(),
            field: args.openbao_gateway_secret_field.clone(),
        }
    }
}

impl Drop for OpenBaoArgs {
    fn drop(&mut self) {
        self.openbao_token.zeroize();
    }
}

impl OpenBaoConfig {
    fn secret_url(&self) -> String {
        format!(
            "{}/v1/{}/data/{}",
            self.addr.trim_end_matches('/'),
            self.mount.trim_matches('/'),
            self.path.trim_matches('/')
        )
    }
}

/// Reads the gateway secret from OpenBao on every call, so rotations are
/// picked up without a restart.
#[derive(Debug, Clone)]
pub struct OpenBaoSecretStore {
    config: OpenBaoConfig,
    http: Client,
}

impl OpenBaoSecretStore {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: OpenBaoConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn read_field(&self) -> Result<Zeroizing<String>, SecretStoreError> {
        let url = self.config.secret_url();

        debug!(mount = %self.config.mount, path = %self.config.path, "reading secret");

        let response = self
            .http
            .get(&url)
            .header("X-Vault-Token", &self.config.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(SecretStoreError::UnexpectedResponse(format!(
                "secret read failed with status {status}: {text}"
            )));
        }

        let mut parsed: KvResponse = response.json().await?;

        match parsed.data.data.remove(&self.config.field) {
            Some(Value::String(value)) if !value.is_empty() => Ok(Zeroizing::new(value)),
            Some(mut other) => {
                wipe(&mut other);

                Err(SecretStoreError::MissingField(self.config.field.clone()))
            }
            None => Err(SecretStoreError::MissingField(self.config.field.clone())),
        }
    }
}

#[async_trait]
impl SecretStore for OpenBaoSecretStore {
    async fn gateway_secret(&self) -> Result<GatewaySecret, SecretStoreError> {
        let value = self.read_field().await?;

        Ok(GatewaySecret::new(value.as_bytes()))
    }
}

#[derive(Debug, Deserialize)]
struct KvResponse {
    data: KvData,
}

#[derive(Debug, Deserialize)]
struct KvData {
    data: FxHashMap<String, Value>,
}

impl Drop for KvData {
    fn drop(&mut self) {
        self.data.values_mut().for_each(wipe);
    }
}

/// Overwrite every string held in `value`.
fn wipe(value: &mut Value) {
    match value {
        Value::String(text) => text.zeroize(),
        Value::Array(items) => items.iter_mut().for_each(wipe),
        Value::Object(fields) => fields.values_mut().for_each(wipe),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
