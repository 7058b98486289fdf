//! Create Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use printshop_app::domain::carts::models::NewCart;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Session cart UUID chosen by the client
    pub uuid: Uuid,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            uuid: request.uuid.into(),
        }
    }
}

/// Cart Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartCreatedResponse {
    /// Created cart UUID
    pub uuid: Uuid,
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "Cart already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .carts
        .create_cart(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/carts/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(cart_uuid = %uuid, "created cart");

    Ok(Json(CartCreatedResponse {
        uuid: uuid.into_uuid(),
    }))
}
