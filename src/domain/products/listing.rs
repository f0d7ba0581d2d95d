//! Display-ready listings
//!
//! The remote collection has known data-quality problems: conceptually
//! identical products stored under multiple records, categories that are
//! missing or only coarsely labelled, and records without images. This module
//! turns a raw fetch into a display-ready list — de-duplicated, classified,
//! and with an image for every entry. It is a workaround applied defensively
//! on every read, not a schema fix; the store is not ours to clean.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::domain::products::models::{Category, Product, ProductId};

/// Placeholder shown for whiskey records without an image of their own.
pub const WHISKEY_PLACEHOLDER_IMAGE: &str = "https://images.cellar.example/placeholders/whiskey.jpg";

/// Placeholder shown for wine records without an image of their own.
pub const WINE_PLACEHOLDER_IMAGE: &str = "https://images.cellar.example/placeholders/wine.jpg";

/// Fine-grained sub-type inferred for filtering, finer than the stored
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Scotch,
    Bourbon,
    Irish,
    Japanese,
    Red,
    White,
    Rose,
    Sparkling,
}

/// Keywords that mark a whiskey sub-type in a name or description.
const WHISKEY_KEYWORDS: [(&str, Style); 5] = [
    ("scotch", Style::Scotch),
    ("bourbon", Style::Bourbon),
    ("irish", Style::Irish),
    ("japanese", Style::Japanese),
    ("tennessee", Style::Bourbon),
];

/// Keywords that mark a wine sub-type in a name or description.
const WINE_KEYWORDS: [(&str, Style); 13] = [
    ("sparkling", Style::Sparkling),
    ("prosecco", Style::Sparkling),
    ("champagne", Style::Sparkling),
    ("rosé", Style::Rose),
    ("rose", Style::Rose),
    ("white", Style::White),
    ("chardonnay", Style::White),
    ("sauvignon blanc", Style::White),
    ("riesling", Style::White),
    ("red", Style::Red),
    ("cabernet", Style::Red),
    ("merlot", Style::Red),
    ("pinot noir", Style::Red),
];

/// One display-ready catalog entry: the de-duplicated record, its inferred
/// style, and a guaranteed image URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub product: Product,
    /// Resolved image: the record's own, or the category placeholder. Never
    /// empty.
    pub image_url: String,
    /// Inferred sub-type; `None` keeps the product out of sub-type filters
    /// but still visible under "all".
    pub style: Option<Style>,
}

impl CatalogEntry {
    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    pub(crate) fn build(product: Product) -> Self {
        let style = infer_style(&product);
        let image_url = resolve_image(&product);

        Self {
            product,
            image_url,
            style,
        }
    }
}

/// Collapses duplicate records for the same logical product.
///
/// The key is the normalized lowercase name plus category — not the id,
/// because the store has historically held several records for one product.
/// On a duplicate, the record with a real (present, non-placeholder) image
/// wins; otherwise the first-seen record is kept. Encounter order of the
/// survivors is preserved.
pub fn dedupe(records: Vec<Product>) -> Vec<Product> {
    let mut order: Vec<String> = Vec::new();
    let mut by_key: FxHashMap<String, Product> = FxHashMap::default();

    for record in records {
        let key = dedup_key(&record);

        if let Some(kept) = by_key.get(&key) {
            if !has_real_image(kept) && has_real_image(&record) {
                by_key.insert(key, record);
            }
        } else {
            order.push(key.clone());
            by_key.insert(key, record);
        }
    }

    order
        .into_iter()
        .filter_map(|key| by_key.remove(&key))
        .collect()
}

/// The normalized de-duplication key for a record.
#[must_use]
pub fn dedup_key(product: &Product) -> String {
    let category = product.category.map_or("", Category::as_str);

    format!("{}-{}", product.name.trim().to_lowercase(), category)
}

/// Whether the record carries a usable image of its own.
///
/// Records have been observed with literal `undefined` fragments baked into
/// their URLs by an earlier ingestion bug; those count as missing.
#[must_use]
pub fn has_real_image(product: &Product) -> bool {
    product.image_url.as_deref().is_some_and(|url| {
        !url.is_empty()
            && !url.contains("undefined")
            && url != WHISKEY_PLACEHOLDER_IMAGE
            && url != WINE_PLACEHOLDER_IMAGE
    })
}

/// The record's image, or the category placeholder when it has none.
#[must_use]
pub fn resolve_image(product: &Product) -> String {
    if has_real_image(product) {
        if let Some(url) = &product.image_url {
            return url.clone();
        }
    }

    placeholder_for(product.category).to_string()
}

/// Category-level placeholder image. Uncategorized records fall back to the
/// wine placeholder.
#[must_use]
pub fn placeholder_for(category: Option<Category>) -> &'static str {
    match category {
        Some(Category::Whiskey) => WHISKEY_PLACEHOLDER_IMAGE,
        _ => WINE_PLACEHOLDER_IMAGE,
    }
}

/// Best-effort sub-type inference.
///
/// A specific stored category maps directly; coarse or missing categories
/// fall back to case-insensitive keyword matching over name and description.
/// Never fails — an unclassifiable product simply has no style.
#[must_use]
pub fn infer_style(product: &Product) -> Option<Style> {
    match product.category {
        Some(Category::Red) => Some(Style::Red),
        Some(Category::White) => Some(Style::White),
        Some(Category::Rose) => Some(Style::Rose),
        Some(Category::Sparkling) => Some(Style::Sparkling),
        Some(Category::Whiskey) => match_keywords(product, &WHISKEY_KEYWORDS),
        Some(Category::Wine) => match_keywords(product, &WINE_KEYWORDS),
        None => match_keywords(product, &WHISKEY_KEYWORDS)
            .or_else(|| match_keywords(product, &WINE_KEYWORDS)),
    }
}

fn match_keywords(product: &Product, keywords: &[(&str, Style)]) -> Option<Style> {
    let haystack = format!("{} {}", product.name, product.description).to_lowercase();

    keywords
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, style)| *style)
}
