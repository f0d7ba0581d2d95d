//! Wishlist state container

use crate::domain::{
    products::models::{Product, ProductId},
    sync::SyncStatus,
};

/// Session-local wishlist: an insertion-ordered set of product snapshots,
/// keyed by product id.
///
/// The single mutation primitive is [`toggle`](Self::toggle) — membership
/// flips on every call. Callers render affordances and messages off
/// [`contains`](Self::contains), not off the toggle itself.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    items: Vec<Product>,
    sync: SyncStatus,
}

impl WishlistState {
    /// An empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Whether the product with `id` is currently saved.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|product| product.id == *id)
    }

    /// Status of the most recent remote synchronization attempt.
    #[must_use]
    pub fn sync_status(&self) -> &SyncStatus {
        &self.sync
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flips membership: removes the product when present, saves the full
    /// snapshot otherwise.
    pub fn toggle(&mut self, product: Product) {
        if self.contains(&product.id) {
            self.items.retain(|saved| saved.id != product.id);
        } else {
            self.items.push(product);
        }
    }

    /// Empties the wishlist.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replaces the entire set with a fetched snapshot. Last write wins.
    pub(crate) fn replace_items(&mut self, items: Vec<Product>) {
        self.items = items;
    }

    pub(crate) fn set_sync_status(&mut self, status: SyncStatus) {
        self.sync = status;
    }
}
