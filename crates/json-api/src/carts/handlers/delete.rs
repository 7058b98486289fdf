//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Delete Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(cart, depot),
    fields(cart_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    state
        .app
        .carts
        .delete_cart(cart.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_uuid = %cart, "deleted cart");

    Ok(StatusCode::OK)
}
