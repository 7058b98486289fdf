use std::path::PathBuf;

use clap::Args;
use printshop::catalog::Catalog;

#[derive(Debug, Args)]
pub(crate) struct CheckCatalogArgs {
    /// Catalog YAML file
    #[arg(long, env = "CATALOG_PATH")]
    catalog_path: PathBuf,
}

pub(crate) fn run(args: &CheckCatalogArgs) -> Result<(), String> {
    let catalog = Catalog::from_yaml_file(&args.catalog_path).map_err(|error| {
        format!(
            "failed to load catalog {}: {error}",
            args.catalog_path.display()
        )
    })?;

    println!("currency: {}", catalog.currency().iso_alpha_code);
    println!("posters: {}", catalog.len());

    for category in catalog.categories() {
        let posters: Vec<&str> = catalog
            .by_category(category)
            .map(|poster| poster.id.as_str())
            .collect();

        println!("{category}: {}", posters.join(", "));
    }

    for poster in catalog.posters() {
        let prices: Vec<String> = poster
            .prices
            .iter()
            .map(|(size, price)| format!("{size} {price}"))
            .collect();

        println!("{} ({}): {}", poster.id, poster.title, prices.join(" / "));
    }

    Ok(())
}
