use clap::{Args, Subcommand};

mod check;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    Check(check::CheckCatalogArgs),
}

pub(crate) fn run(command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Check(args) => check::run(&args),
    }
}
