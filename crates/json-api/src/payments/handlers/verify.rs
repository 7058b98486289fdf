//! Verify Payment Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use printshop_app::domain::payments::models::{PaymentCallback, PaymentOutcome};

use crate::{extensions::*, payments::errors::into_status_error, state::State};

/// Verify Payment Request
///
/// Fields left out of the body are treated as blank and rejected.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyPaymentRequest {
    /// Gateway order id
    #[serde(default)]
    pub order_id: String,

    /// Gateway payment id
    #[serde(default)]
    pub payment_id: String,

    /// Hex HMAC-SHA256 signature sent by the gateway
    #[serde(default)]
    pub signature: String,

    /// Customer record, passed through unchanged
    #[serde(default)]
    #[salvo(schema(value_type = Object))]
    pub customer_details: Map<String, Value>,
}

impl From<VerifyPaymentRequest> for PaymentCallback {
    fn from(request: VerifyPaymentRequest) -> Self {
        PaymentCallback {
            order_id: request.order_id,
            payment_id: request.payment_id,
            signature: request.signature,
            customer_details: request.customer_details,
        }
    }
}

/// Verify Payment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyPaymentResponse {
    /// Gateway order id
    pub order_id: String,

    /// Gateway payment id
    pub payment_id: String,

    /// Whether the signature was issued by the gateway
    pub authentic: bool,

    /// `confirmed` or `rejected`
    pub status: String,
}

impl From<PaymentOutcome> for VerifyPaymentResponse {
    fn from(outcome: PaymentOutcome) -> Self {
        Self {
            order_id: outcome.order_id,
            payment_id: outcome.payment_id,
            authentic: outcome.authentic,
            status: outcome.status.as_str().to_string(),
        }
    }
}

/// Verify Payment Handler
///
/// Checks a payment callback signature. A signature that does not match is
/// reported as `rejected`, not as an error.
#[endpoint(
    tags("payments"),
    summary = "Verify Payment",
    responses(
        (status_code = StatusCode::OK, description = "Payment checked"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "payments.verify",
    skip(json, depot),
    fields(
        order_id = tracing::field::Empty,
        request_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<VerifyPaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<VerifyPaymentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("order_id", request.order_id.as_str());

    if let Some(request_id) = depot.request_id() {
        span.record("request_id", request_id);
    }

    let outcome = state
        .app
        .payments
        .verify_payment(request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(outcome.into()))
}
