//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, cart_response},
    },
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns a cart with its lines and totals.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .app
        .carts
        .get_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart_response(session)?))
}
