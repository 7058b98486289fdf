//! Shared test support.

use std::sync::Arc;

use printshop::catalog::Catalog;


pub(crate) const CATALOG_YAML: &str = r#"
currency: INR
posters:
  - { id: p1, title: Poster One, category: movies, prices: { A4: "150", A3: "249" } }
  - { id: p2, title: Poster Two, category: botanical, prices: { A4: "129" } }
"#;

pub(crate) fn catalog() -> Arc<Catalog> {
    match Catalog::from_yaml_str(CATALOG_YAML) {
        Ok(catalog) => Arc::new(catalog),
        Err(error) => panic!("test catalog should parse: {error}"),
    }
}
