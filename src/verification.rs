//! Payment signature verification
//!
//! The gateway signs `"{order_id}|{payment_id}"` with HMAC-SHA256 under the
//! merchant secret and sends the lower-case hex digest back with the payment
//! callback. Verification recomputes that digest and compares it in constant
//! time. A mismatch is an ordinary outcome (`authentic == false`), while a
//! request missing one of its fields is an error.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

/// Byte separating the order id from the payment id in the signed message.
pub const MESSAGE_DELIMITER: char = '|';

/// Length of a hex-encoded SHA-256 digest.
const SIGNATURE_HEX_CHARS: usize = 64;

/// Merchant secret shared with the payment gateway.
#[derive(Clone)]
pub struct GatewaySecret {
    bytes: Vec<u8>,
}

impl GatewaySecret {
    /// Wrap raw secret material.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Check if the secret has no material.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<String> for GatewaySecret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl fmt::Debug for GatewaySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GatewaySecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for GatewaySecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Payment callback fields needed to verify a transaction.
///
/// `customer_details` is carried through untouched for whoever consumes the
/// verification result.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentVerificationRequest<C = ()> {
    /// Gateway order id.
    pub order_id: String,

    /// Gateway payment id.
    pub payment_id: String,

    /// Hex-encoded HMAC-SHA256 signature supplied by the gateway.
    pub signature: String,

    /// Opaque customer record.
    pub customer_details: C,
}

impl<C> PaymentVerificationRequest<C> {
    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::InvalidRequest`] naming the first blank field.
    pub fn validate(&self) -> Result<(), VerificationError> {
        require("order_id", &self.order_id)?;
        require("payment_id", &self.payment_id)?;
        require("signature", &self.signature)
    }

    /// Verify this request against `secret`.
    ///
    /// # Errors
    ///
    /// See [`verify`].
    pub fn verify(&self, secret: &GatewaySecret) -> Result<Verification, VerificationError> {
        verify(&self.order_id, &self.payment_id, &self.signature, secret)
    }
}

/// Outcome of a well-formed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    /// Whether the signature was issued with the merchant secret.
    pub authentic: bool,
}

/// Reasons verification could not be attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// A required request field was missing or blank.
    #[error("invalid verification request: missing {0}")]
    InvalidRequest(&'static str),

    /// The merchant secret has no key material.
    #[error("gateway secret is empty")]
    EmptySecret,
}

/// Compute the hex signature the gateway would send for an order and payment.
///
/// # Errors
///
/// Returns [`VerificationError::EmptySecret`] when `secret` is empty.
pub fn sign(
    order_id: &str,
    payment_id: &str,
    secret: &GatewaySecret,
) -> Result<String, VerificationError> {
    if secret.is_empty() {
        return Err(VerificationError::EmptySecret);
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_invalid_length| VerificationError::EmptySecret)?;

    mac.update(canonical_message(order_id, payment_id).as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check a payment callback signature.
///
/// The supplied signature is compared case-insensitively and otherwise
/// exactly: surrounding whitespace, a wrong length or non-hex content make it
/// not authentic.
///
/// # Errors
///
/// - [`VerificationError::InvalidRequest`]: `order_id`, `payment_id` or
///   `signature` is blank.
/// - [`VerificationError::EmptySecret`]: `secret` is empty.
pub fn verify(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &GatewaySecret,
) -> Result<Verification, VerificationError> {
    require("order_id", order_id)?;
    require("payment_id", payment_id)?;
    require("signature", signature)?;

    let expected = sign(order_id, payment_id, secret)?;
    let supplied = signature.to_ascii_lowercase();

    let authentic = supplied.len() == SIGNATURE_HEX_CHARS
        && bool::from(expected.as_bytes().ct_eq(supplied.as_bytes()));

    Ok(Verification { authentic })
}

fn canonical_message(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}{MESSAGE_DELIMITER}{payment_id}")
}

fn require(field: &'static str, value: &str) -> Result<(), VerificationError> {
    if value.trim().is_empty() {
        Err(VerificationError::InvalidRequest(field))
    } else {
        Ok(())
    }
}
