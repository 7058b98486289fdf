//! Poster Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, posters::get::PosterResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PostersResponse {
    /// The list of posters
    pub posters: Vec<PosterResponse>,
}

/// Poster Index Handler
///
/// Returns the catalog, optionally narrowed to one category.
#[endpoint(tags("posters"), summary = "List Posters")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<PostersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = category
        .into_inner()
        .filter(|category| !category.trim().is_empty());

    let posters = state
        .app
        .catalog
        .list_posters(category)
        .await
        .or_500("failed to list posters")?;

    Ok(Json(PostersResponse {
        posters: posters.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use printshop_app::domain::catalog::MockCatalogService;

    use crate::test_helpers::{catalog_service, make_poster};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("posters").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_200() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_posters()
            .once()
            .withf(Option::is_none)
            .return_once(|_| Ok(vec![make_poster("interstellar"), make_poster("dune")]));

        let mut res = TestClient::get("http://example.com/posters")
            .send(&make_service(catalog))
            .await;

        let body: PostersResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.posters.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_category_query_param() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_posters()
            .once()
            .withf(|category| category.as_deref() == Some("movies"))
            .return_once(|_| Ok(vec![make_poster("interstellar")]));

        let res = TestClient::get("http://example.com/posters?category=movies")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_ignores_blank_category() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_posters()
            .once()
            .withf(Option::is_none)
            .return_once(|_| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/posters?category=")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
