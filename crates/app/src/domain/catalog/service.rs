//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use printshop::{
    catalog::{Catalog, Poster},
    posters::PosterId,
};

use crate::domain::catalog::errors::CatalogServiceError;

#[derive(Debug, Clone)]
pub struct InMemoryCatalogService {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn list_posters(
        &self,
        category: Option<String>,
    ) -> Result<Vec<Poster>, CatalogServiceError> {
        let posters = match category.as_deref() {
            Some(category) => self.catalog.by_category(category).cloned().collect(),
            None => self.catalog.posters().to_vec(),
        };

        Ok(posters)
    }

    async fn get_poster(&self, poster: PosterId) -> Result<Poster, CatalogServiceError> {
        self.catalog
            .get(&poster)
            .cloned()
            .ok_or(CatalogServiceError::NotFound)
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogServiceError> {
        Ok(self
            .catalog
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List posters, optionally narrowed to a category.
    async fn list_posters(
        &self,
        category: Option<String>,
    ) -> Result<Vec<Poster>, CatalogServiceError>;

    /// Retrieve a single poster.
    async fn get_poster(&self, poster: PosterId) -> Result<Poster, CatalogServiceError>;

    async fn categories(&self) -> Result<Vec<String>, CatalogServiceError>;
}
