//! Get Poster Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use printshop::{catalog::Poster, posters::PosterId};

use crate::{
    extensions::*, money::MoneyResponse, posters::errors::into_status_error, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PosterResponse {
    /// The poster id
    pub id: String,

    /// Display title
    pub title: String,

    /// Browsing category
    pub category: String,

    /// Unit price of each size the poster is printed in, smallest first
    pub prices: Vec<PosterPriceResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PosterPriceResponse {
    /// Print size (A4, A3, A2, A1)
    pub size: String,

    /// Unit price
    pub price: MoneyResponse,
}

impl From<Poster> for PosterResponse {
    fn from(poster: Poster) -> Self {
        PosterResponse {
            id: poster.id.to_string(),
            title: poster.title,
            category: poster.category,
            prices: poster
                .prices
                .iter()
                .map(|(size, price)| PosterPriceResponse {
                    size: size.to_string(),
                    price: price.into(),
                })
                .collect(),
        }
    }
}

/// Get Poster Handler
///
/// Returns a poster with its per-size prices.
#[endpoint(
    tags("posters"),
    summary = "Get Poster",
    responses(
        (status_code = StatusCode::OK, description = "Poster found"),
        (status_code = StatusCode::NOT_FOUND, description = "Poster not found"),
    ),
)]
pub(crate) async fn handler(
    poster: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PosterResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let poster = state
        .app
        .catalog
        .get_poster(PosterId::new(poster.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(poster.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use printshop_app::domain::catalog::{CatalogServiceError, MockCatalogService};

    use crate::test_helpers::{catalog_service, make_poster};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("posters/{poster}").get(handler))
    }

    #[tokio::test]
    async fn test_get_poster_returns_prices_in_minor_units() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_poster()
            .once()
            .withf(|id| id.as_str() == "interstellar")
            .return_once(|_| Ok(make_poster("interstellar")));

        let mut res = TestClient::get("http://example.com/posters/interstellar")
            .send(&make_service(catalog))
            .await;

        let body: PosterResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, "interstellar");
        assert_eq!(body.prices.len(), 2);

        let a4 = body.prices.first().ok_or("missing A4 price")?;

        assert_eq!(a4.size, "A4");
        assert_eq!(a4.price.amount, 150_00);
        assert_eq!(a4.price.currency, "INR");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_poster_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_poster()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let res = TestClient::get("http://example.com/posters/nope")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
