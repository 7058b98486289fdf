use clap::{Parser, Subcommand};

mod catalog;
mod payments;

#[derive(Debug, Parser)]
#[command(name = "printshop-app", about = "Printshop CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
    Payments(payments::PaymentsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(command),
            Commands::Payments(command) => payments::run(command).await,
        }
    }
}
