//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use printshop::posters::PosterId;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, cart_response, parse_quantity, parse_size},
    },
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New number of prints; must be at least one
    pub quantity: i64,
}

/// Update Cart Item Handler
///
/// Replaces the quantity of an existing line.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    poster: PathParam<String>,
    size: PathParam<String>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let size = parse_size(&size.into_inner())?;
    let quantity = parse_quantity(json.into_inner().quantity)?;

    let session = state
        .app
        .carts
        .update_item(
            cart.into_inner().into(),
            PosterId::new(poster.into_inner()),
            size,
            quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart_response(session)?))
}
