//! Poster catalog
//!
//! Posters are loaded from a YAML document and priced per size in a single
//! currency:
//!
//! ```yaml
//! currency: INR
//! posters:
//!   - id: interstellar
//!     title: Interstellar
//!     category: movies
//!     prices:
//!       A4: "150"
//!       A3: "249.50"
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    posters::{PosterId, PosterSize, UnknownSizeError},
    pricing::{PricingError, parse_amount, parse_currency},
};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price or unknown currency
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A price was listed under an unknown size
    #[error(transparent)]
    UnknownSize(#[from] UnknownSizeError),

    /// Two posters share an id
    #[error("duplicate poster id: {0}")]
    DuplicatePoster(PosterId),

    /// A poster lists no prices
    #[error("poster {0} has no prices")]
    NoPrices(PosterId),

    /// A poster is priced in another currency (poster, price currency, catalog currency)
    #[error("poster {0} is priced in {1}, but the catalog uses {2}")]
    CurrencyMismatch(PosterId, &'static str, &'static str),
}

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    currency: String,
    posters: Vec<PosterFixture>,
}

#[derive(Debug, Deserialize)]
struct PosterFixture {
    id: String,
    title: String,
    category: String,
    prices: BTreeMap<String, String>,
}

/// A poster and its price per size.
#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
    /// Poster id
    pub id: PosterId,

    /// Display title
    pub title: String,

    /// Browsing category
    pub category: String,

    /// Unit price per available size
    pub prices: BTreeMap<PosterSize, Money<'static, Currency>>,
}

impl Poster {
    /// Unit price for `size`, if the poster is printed in it.
    pub fn price(&self, size: PosterSize) -> Option<&Money<'static, Currency>> {
        self.prices.get(&size)
    }
}

/// Posters available in the storefront, in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: &'static Currency,
    posters: Vec<Poster>,
    index: FxHashMap<PosterId, usize>,
}

impl Catalog {
    /// Build a catalog from posters already priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, a poster without prices, or a price
    /// in another currency.
    pub fn new(currency: &'static Currency, posters: Vec<Poster>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, poster) in posters.iter().enumerate() {
            if poster.prices.is_empty() {
                return Err(CatalogError::NoPrices(poster.id.clone()));
            }

            if let Some(price) = poster.prices.values().find(|p| p.currency() != currency) {
                return Err(CatalogError::CurrencyMismatch(
                    poster.id.clone(),
                    price.currency().iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if index.insert(poster.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicatePoster(poster.id.clone()));
            }
        }

        Ok(Self {
            currency,
            posters,
            index,
        })
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or describes an invalid catalog.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;
        let currency = parse_currency(&fixture.currency)?;

        let posters = fixture
            .posters
            .into_iter()
            .map(|poster| -> Result<Poster, CatalogError> {
                let prices = poster
                    .prices
                    .iter()
                    .map(|(size, amount)| -> Result<_, CatalogError> {
                        Ok((size.parse::<PosterSize>()?, parse_amount(amount, currency)?))
                    })
                    .collect::<Result<BTreeMap<_, _>, _>>()?;

                Ok(Poster {
                    id: PosterId::new(poster.id),
                    title: poster.title,
                    category: poster.category,
                    prices,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(currency, posters)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Find a poster by id.
    pub fn get(&self, id: &PosterId) -> Option<&Poster> {
        self.index
            .get(id)
            .and_then(|position| self.posters.get(*position))
    }

    /// All posters in catalog order.
    pub fn posters(&self) -> &[Poster] {
        &self.posters
    }

    /// Posters in `category`, in catalog order. Matching ignores ASCII case.
    pub fn by_category<'c>(&'c self, category: &'c str) -> impl Iterator<Item = &'c Poster> + 'c {
        self.posters
            .iter()
            .filter(move |poster| poster.category.eq_ignore_ascii_case(category))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();

        for poster in &self.posters {
            if !categories.contains(&poster.category.as_str()) {
                categories.push(&poster.category);
            }
        }

        categories
    }

    /// Unit price of a poster in a size.
    pub fn price_of(&self, id: &PosterId, size: PosterSize) -> Option<Money<'static, Currency>> {
        self.get(id).and_then(|poster| poster.price(size)).copied()
    }

    /// The catalog currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of posters.
    pub fn len(&self) -> usize {
        self.posters.len()
    }

    /// Check if the catalog has no posters.
    pub fn is_empty(&self) -> bool {
        self.posters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    const YAML: &str = r#"
currency: INR
posters:
  - id: interstellar
    title: Interstellar
    category: movies
    prices:
      A4: "150"
      A3: "249.50"
  - id: monstera
    title: Monstera Leaf
    category: botanical
    prices:
      A4: "129"
  - id: dune
    title: Dune
    category: Movies
    prices:
      A2: "399"
"#;

    #[test]
    fn parses_posters_in_order() -> TestResult {
        let catalog = Catalog::from_yaml_str(YAML)?;

        let ids: Vec<&str> = catalog.posters().iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, ["interstellar", "monstera", "dune"]);
        assert_eq!(catalog.currency(), iso::INR);
        assert_eq!(catalog.len(), 3);

        Ok(())
    }

    #[test]
    fn price_of_looks_up_size() -> TestResult {
        let catalog = Catalog::from_yaml_str(YAML)?;
        let id = PosterId::new("interstellar");

        assert_eq!(
            catalog.price_of(&id, PosterSize::A3),
            Some(Money::from_minor(249_50, iso::INR))
        );
        assert_eq!(catalog.price_of(&id, PosterSize::A1), None);
        assert_eq!(catalog.price_of(&PosterId::new("nope"), PosterSize::A4), None);

        Ok(())
    }

    #[test]
    fn by_category_ignores_case() -> TestResult {
        let catalog = Catalog::from_yaml_str(YAML)?;

        let movies: Vec<&str> = catalog
            .by_category("movies")
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(movies, ["interstellar", "dune"]);
        assert_eq!(catalog.categories(), ["movies", "botanical", "Movies"]);

        Ok(())
    }

    #[test]
    fn rejects_unknown_size() {
        let yaml = r#"
currency: INR
posters:
  - id: p1
    title: P1
    category: misc
    prices:
      B5: "100"
"#;

        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(CatalogError::UnknownSize(_))
        ));
    }

    #[test]
    fn rejects_unknown_currency() {
        let yaml = "currency: XYZ\nposters: []\n";

        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(CatalogError::Pricing(PricingError::UnknownCurrency(_)))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = r#"
currency: INR
posters:
  - { id: p1, title: P1, category: misc, prices: { A4: "100" } }
  - { id: p1, title: P1 again, category: misc, prices: { A3: "200" } }
"#;

        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(CatalogError::DuplicatePoster(id)) if id.as_str() == "p1"
        ));
    }

    #[test]
    fn rejects_poster_without_prices() {
        let yaml = "currency: INR\nposters:\n  - { id: p1, title: P1, category: misc, prices: {} }\n";

        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(CatalogError::NoPrices(_))
        ));
    }

    #[test]
    fn from_yaml_file_reads_disk() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("catalog.yml");

        fs::write(&path, YAML)?;

        assert_eq!(Catalog::from_yaml_file(&path)?.len(), 3);

        Ok(())
    }

    #[test]
    fn from_yaml_file_reports_missing_file() {
        assert!(matches!(
            Catalog::from_yaml_file("/definitely/not/here.yml"),
            Err(CatalogError::Io(_))
        ));
    }
}
