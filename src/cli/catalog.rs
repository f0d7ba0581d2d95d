//! Catalog maintenance commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use cellar::{
    fixtures,
    products::StoreCatalogService,
    store::{HttpDocumentStore, HttpStoreConfig},
};

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Seed the sample catalog into the store.
    Seed(StoreArgs),

    /// Write images onto records that lack a usable one.
    BackfillImages(StoreArgs),

    /// Delete records that duplicate another record's name and category.
    CleanupDuplicates(StoreArgs),
}

#[derive(Debug, Args)]
struct StoreArgs {
    /// Document store base URL
    #[arg(long, env = "STORE_URL")]
    store_url: String,

    /// Document store API key
    #[arg(long, env = "STORE_API_KEY", hide_env_values = true)]
    api_key: String,
}

impl StoreArgs {
    fn catalog(&self) -> StoreCatalogService {
        let store = HttpDocumentStore::new(HttpStoreConfig {
            base_url: self.store_url.clone(),
            api_key: self.api_key.clone(),
        });

        StoreCatalogService::new(Arc::new(store))
    }
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Seed(args) => seed(&args).await,
        CatalogSubcommand::BackfillImages(args) => backfill_images(&args).await,
        CatalogSubcommand::CleanupDuplicates(args) => cleanup_duplicates(&args).await,
    }
}

async fn seed(args: &StoreArgs) -> Result<(), String> {
    let outcome = args
        .catalog()
        .seed(&fixtures::sample_products(), &fixtures::obsolete_product_ids())
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    println!("added: {}", outcome.added);
    println!("updated: {}", outcome.updated);
    println!("removed_obsolete: {}", outcome.removed_obsolete);

    Ok(())
}

async fn backfill_images(args: &StoreArgs) -> Result<(), String> {
    let updated = args
        .catalog()
        .backfill_images()
        .await
        .map_err(|error| format!("failed to backfill images: {error}"))?;

    println!("updated: {updated}");

    Ok(())
}

async fn cleanup_duplicates(args: &StoreArgs) -> Result<(), String> {
    let deleted = args
        .catalog()
        .cleanup_duplicates()
        .await
        .map_err(|error| format!("failed to clean up duplicates: {error}"))?;

    println!("deleted: {deleted}");

    Ok(())
}
