//! Catalog service
//!
//! Read path: fetch the remote product collection and produce the
//! display-ready listing described in [`listing`](super::listing). The read
//! path never writes to the store.
//!
//! Maintenance path: explicit, separately invoked write operations (seeding,
//! image backfill, duplicate cleanup) used by the admin CLI.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::products::{
        errors::CatalogError,
        listing::{CatalogEntry, dedup_key, dedupe, placeholder_for},
        models::{Category, NewProduct, Product, ProductId, ProductUpdate},
    },
    store::{DocumentStore, ProductQuery, StoreError},
};

/// Upper bound used by maintenance operations that need the whole
/// collection rather than a listing page.
const MAINTENANCE_FETCH_LIMIT: usize = 500;

/// Known product images, keyed by a lowercase fragment of the product name.
/// Consulted by the image backfill before falling back to the category
/// placeholder.
const PRODUCT_IMAGE_MAP: [(&str, &str); 8] = [
    (
        "jack daniels",
        "https://www.oaks.delivery/wp-content/uploads/Jack-Daniels-Old-No7-cropped.webp",
    ),
    (
        "jameson",
        "https://dayspringshop.com/wp-content/uploads/2024/05/DSC4620.jpg",
    ),
    (
        "macallan",
        "https://dayspringshop.com/wp-content/uploads/2024/05/DSC4620.jpg",
    ),
    (
        "johnnie walker",
        "https://www.medoc.com.tw/web/wp-content/uploads/shop/product/WKJW3570.jpg",
    ),
    (
        "cabernet",
        "https://cdn.shopify.com/s/files/1/0028/9669/1264/files/I26705-10_900x.png",
    ),
    (
        "pinot noir",
        "https://www.maset.com/cdnassets/products/red-wines/lg/bottle/pinot-noir-lg-1.png",
    ),
    ("malbec", "https://i.ibb.co/bRZ6P0Q/malbec.png"),
    ("prosecco", "https://i.ibb.co/C6v0XZv/prosecco.png"),
];

/// Storefront listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Every product, whatever its category.
    All,
    /// Products stored with the whiskey category.
    Whiskey,
    /// Products on the wine side: the specific sub-types plus the legacy
    /// coarse `wine` value.
    Wine,
}

impl Section {
    fn includes(self, category: Option<Category>) -> bool {
        match self {
            Self::All => true,
            Self::Whiskey => category == Some(Category::Whiskey),
            Self::Wine => category.is_some_and(Category::is_wine),
        }
    }

    /// The store query for this section. Whiskey is a single category, so
    /// the store can pre-filter; the wine section spans several categories
    /// and is filtered client-side after a full fetch.
    fn store_query(self) -> ProductQuery {
        match self {
            Self::Whiskey => ProductQuery::category(Category::Whiskey),
            Self::All | Self::Wine => ProductQuery::default(),
        }
    }
}

/// Read-side catalog operations, per page visit. Restartable: every call
/// re-fetches; nothing is persisted locally.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// The display-ready listing for a section.
    ///
    /// Either the complete de-duplicated list is returned, or the fetch
    /// error — never a partial result.
    async fn list(&self, section: Section) -> Result<Vec<CatalogEntry>, CatalogError>;

    /// A single entry by the id listings returned for it.
    async fn product(&self, id: &ProductId) -> Result<CatalogEntry, CatalogError>;
}

/// [`CatalogService`] over the remote document store.
#[derive(Clone)]
pub struct StoreCatalogService {
    store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for StoreCatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCatalogService").finish_non_exhaustive()
    }
}

impl StoreCatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Add-or-update the sample catalog, deleting known-obsolete records
    /// first.
    ///
    /// Samples are matched against existing records by the same normalized
    /// name-plus-category key the listing de-duplicates by; matched records
    /// are updated in place when their fields drifted, everything else is
    /// added.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] hit; the operation does not roll
    /// back records already written.
    pub async fn seed(
        &self,
        samples: &[NewProduct],
        obsolete_ids: &[ProductId],
    ) -> Result<SeedOutcome, CatalogError> {
        let mut outcome = SeedOutcome::default();

        for id in obsolete_ids {
            match self.store.delete_product(id).await {
                Ok(()) => outcome.removed_obsolete += 1,
                Err(StoreError::NotFound) => {}
                Err(error) => return Err(error.into()),
            }
        }

        // Match against the records the listing would keep, so drift updates
        // land on the surviving record of any duplicate pair.
        let existing = dedupe(
            self.store
                .get_products(ProductQuery {
                    limit: MAINTENANCE_FETCH_LIMIT,
                    ..ProductQuery::default()
                })
                .await?,
        );

        for sample in samples {
            let key = sample_key(sample);
            let matched = existing.iter().find(|record| dedup_key(record) == key);

            match matched {
                None => {
                    self.store.add_product(sample.clone()).await?;
                    outcome.added += 1;
                }
                Some(record) => {
                    let update = drift(record, sample);
                    if update != ProductUpdate::default() {
                        self.store.update_product(&record.id, update).await?;
                        outcome.updated += 1;
                    }
                }
            }
        }

        info!(
            added = outcome.added,
            updated = outcome.updated,
            removed = outcome.removed_obsolete,
            "catalog seed finished"
        );

        Ok(outcome)
    }

    /// Writes an image URL onto every record that lacks a usable one.
    ///
    /// This is the one write the storefront core performs against product
    /// records, and it is explicitly separate from the read path. Returns
    /// the number of records updated.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] hit.
    pub async fn backfill_images(&self) -> Result<u64, CatalogError> {
        let records = self
            .store
            .get_products(ProductQuery {
                limit: MAINTENANCE_FETCH_LIMIT,
                ..ProductQuery::default()
            })
            .await?;

        let mut updated = 0;

        for record in records {
            if !needs_image(&record) {
                continue;
            }

            let url = known_image_for(&record.name)
                .unwrap_or_else(|| placeholder_for(record.category));

            debug!(product = %record.id, url, "backfilling product image");
            self.store
                .update_product(&record.id, ProductUpdate::image(url))
                .await?;
            updated += 1;
        }

        info!(updated, "image backfill finished");

        Ok(updated)
    }

    /// Deletes store records that duplicate another record's normalized
    /// name-plus-category key, keeping the record the listing would keep.
    ///
    /// Returns the number of records deleted. The listing still de-duplicates
    /// defensively on every read; this merely shrinks the collection.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] hit.
    pub async fn cleanup_duplicates(&self) -> Result<u64, CatalogError> {
        let records = self
            .store
            .get_products(ProductQuery {
                limit: MAINTENANCE_FETCH_LIMIT,
                ..ProductQuery::default()
            })
            .await?;

        let survivors: Vec<ProductId> = dedupe(records.clone())
            .into_iter()
            .map(|record| record.id)
            .collect();

        let mut deleted = 0;

        for record in records {
            if survivors.contains(&record.id) {
                continue;
            }

            debug!(product = %record.id, name = %record.name, "deleting duplicate record");
            self.store.delete_product(&record.id).await?;
            deleted += 1;
        }

        info!(deleted, "duplicate cleanup finished");

        Ok(deleted)
    }
}

#[async_trait]
impl CatalogService for StoreCatalogService {
    async fn list(&self, section: Section) -> Result<Vec<CatalogEntry>, CatalogError> {
        let records = self.store.get_products(section.store_query()).await?;
        debug!(fetched = records.len(), ?section, "building catalog listing");

        let entries = dedupe(records)
            .into_iter()
            .filter(|record| section.includes(record.category))
            .map(CatalogEntry::build)
            .collect();

        Ok(entries)
    }

    async fn product(&self, id: &ProductId) -> Result<CatalogEntry, CatalogError> {
        let entries = self.list(Section::All).await?;

        entries
            .into_iter()
            .find(|entry| entry.id() == id)
            .ok_or(CatalogError::NotFound)
    }
}

/// Counts reported by [`StoreCatalogService::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub added: u64,
    pub updated: u64,
    pub removed_obsolete: u64,
}

fn sample_key(sample: &NewProduct) -> String {
    let category = sample.category.map_or("", Category::as_str);

    format!("{}-{}", sample.name.trim().to_lowercase(), category)
}

/// Whether the record should receive a backfilled image.
fn needs_image(record: &Product) -> bool {
    record
        .image_url
        .as_deref()
        .is_none_or(|url| url.is_empty() || url.contains("undefined"))
}

fn known_image_for(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();

    PRODUCT_IMAGE_MAP
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|(_, url)| *url)
}

/// Field-by-field drift between a stored record and its sample.
fn drift(record: &Product, sample: &NewProduct) -> ProductUpdate {
    let mut update = ProductUpdate::default();

    if record.price != sample.price {
        update.price = Some(sample.price);
    }
    if record.description != sample.description {
        update.description = Some(sample.description.clone());
    }
    if record.stock != sample.stock {
        update.stock = Some(sample.stock);
    }
    if (record.rating - sample.rating).abs() > f64::EPSILON {
        update.rating = Some(sample.rating);
    }
    if sample.image_url.is_some() && record.image_url != sample.image_url {
        update.image_url = sample.image_url.clone();
    }

    update
}
