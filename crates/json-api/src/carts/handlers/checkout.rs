//! Cart Checkout Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

/// Cart Checkout Handler
///
/// Reports whether the cart may proceed to checkout, and how much is missing
/// if it may not.
#[endpoint(
    tags("carts"),
    summary = "Get Checkout Status",
    responses(
        (status_code = StatusCode::OK, description = "Checkout status"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .carts
        .checkout_status(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use printshop_app::domain::carts::{CartsServiceError, MockCartsService, models::CartUuid};

    use crate::test_helpers::{carts_service, make_session};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/checkout").get(handler))
    }

    #[tokio::test]
    async fn test_empty_cart_cannot_check_out() -> TestResult {
        let uuid = CartUuid::new();
        let summary = make_session(uuid).cart.checkout_summary();

        let mut carts = MockCartsService::new();

        carts
            .expect_checkout_status()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(summary));

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}/checkout"))
            .send(&make_service(carts))
            .await;

        let body: CheckoutResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.can_checkout);
        assert_eq!(body.item_count, 0);
        assert_eq!(body.minimum_order_value.amount, 259_00);
        assert_eq!(body.shortfall.amount, 259_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_checkout_status()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/carts/{}/checkout",
            CartUuid::new()
        ))
        .send(&make_service(carts))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
