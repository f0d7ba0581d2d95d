//! Cellar admin CLI commands.

use clap::{Parser, Subcommand};

mod catalog;

#[derive(Debug, Parser)]
#[command(name = "cellar", about = "Cellar storefront admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(command).await,
        }
    }
}
