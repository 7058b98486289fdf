//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use printshop::posters::PosterId;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, cart_response, parse_size},
    },
    extensions::*,
    state::State,
};

/// Delete Cart Item Handler
///
/// Removing a line that is not in the cart leaves the cart unchanged.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    )
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    poster: PathParam<String>,
    size: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let size = parse_size(&size.into_inner())?;

    let session = state
        .app
        .carts
        .remove_item(
            cart.into_inner().into(),
            PosterId::new(poster.into_inner()),
            size,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart_response(session)?))
}
