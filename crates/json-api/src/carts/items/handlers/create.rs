//! Create Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use printshop::posters::PosterId;
use printshop_app::domain::carts::models::NewCartItem;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, cart_response, parse_quantity, parse_size},
    },
    extensions::*,
    state::State,
};

/// Create Cart Item Request
///
/// The unit price is taken from the catalog.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    /// Poster to add
    pub poster_id: String,

    /// Print size (A4, A3, A2, A1)
    pub size: String,

    /// Number of prints; added to any existing line for the same poster and size
    pub quantity: i64,
}

impl TryFrom<CreateCartItemRequest> for NewCartItem {
    type Error = StatusError;

    fn try_from(request: CreateCartItemRequest) -> Result<Self, Self::Error> {
        Ok(NewCartItem {
            poster_id: PosterId::new(request.poster_id),
            size: parse_size(&request.size)?,
            quantity: parse_quantity(request.quantity)?,
        })
    }
}

/// Create Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or poster not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(cart, json, depot, res),
    fields(cart_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    let item = NewCartItem::try_from(json.into_inner())?;
    let location = format!("/carts/{cart}/items/{}/{}", item.poster_id, item.size);

    let session = state
        .app
        .carts
        .add_item(cart.into(), item)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, location, true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart_response(session)?))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use printshop::{cart::CartError, posters::PosterSize};
    use printshop_app::domain::carts::{CartsServiceError, MockCartsService, models::CartUuid};

    use crate::test_helpers::{carts_service, make_filled_session};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/items").post(handler))
    }

    #[tokio::test]
    async fn test_add_item_success() -> TestResult {
        let uuid = CartUuid::new();
        let session = make_filled_session(uuid)?;

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |u, item| {
                *u == uuid
                    && *item
                        == NewCartItem {
                            poster_id: PosterId::new("p1"),
                            size: PosterSize::A4,
                            quantity: 2,
                        }
            })
            .return_once(move |_, _| Ok(session));

        let mut res = TestClient::post(format!("http://example.com/carts/{uuid}/items"))
            .json(&json!({ "poster_id": "p1", "size": "a4", "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            location,
            Some(format!("/carts/{uuid}/items/p1/A4").as_str())
        );
        assert_eq!(body.subtotal.amount, 300_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_zero_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "poster_id": "p1", "size": "A4", "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_negative_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "poster_id": "p1", "size": "A4", "quantity": -1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_unknown_size_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "poster_id": "p1", "size": "B2", "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_unknown_poster_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, item| Err(CartsServiceError::UnknownPoster(item.poster_id)));

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "poster_id": "nope", "size": "A4", "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_rejected_by_cart_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartError::Overflow.into()));

        let res = TestClient::post(format!("http://example.com/carts/{}/items", CartUuid::new()))
            .json(&json!({ "poster_id": "p1", "size": "A4", "quantity": 4_000_000_000_u32 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
