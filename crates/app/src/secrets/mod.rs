//! Runtime secrets

mod errors;
pub mod openbao;
mod store;

pub use errors::SecretStoreError;
pub use openbao::{OpenBaoArgs, OpenBaoConfig, OpenBaoSecretStore};
pub use store::*;
