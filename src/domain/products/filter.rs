//! Listing filters
//!
//! Pure, client-side narrowing of an already-fetched listing. No remote
//! calls; pages apply a filter to the entries they hold.

use rust_decimal::Decimal;

use crate::domain::products::listing::{CatalogEntry, Style};

/// Criteria a listing page applies on top of its section.
///
/// Every criterion is optional; an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Match only entries with this inferred style. Entries with no style
    /// never match a style filter.
    pub style: Option<Style>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Minimum rating, inclusive.
    pub min_rating: Option<f64>,
    /// Case-insensitive substring over name and description.
    pub search: Option<String>,
}

impl CatalogFilter {
    /// Whether `entry` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(style) = self.style {
            if entry.style != Some(style) {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if entry.product.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if entry.product.price > max {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if entry.product.rating < min {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let name = entry.product.name.to_lowercase();
            let description = entry.product.description.to_lowercase();

            if !name.contains(&term) && !description.contains(&term) {
                return false;
            }
        }

        true
    }

    /// The entries satisfying this filter, in their listing order.
    #[must_use]
    pub fn apply(&self, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
        entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}
