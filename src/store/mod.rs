//! Document store client
//!
//! The catalog and per-user records live in a hosted document database. This
//! module defines the vendor-agnostic client seam the rest of the crate talks
//! to, the tagged error taxonomy remote failures surface as, and the two
//! provided backends: [`HttpDocumentStore`] for the hosted service and
//! [`MemoryDocumentStore`] for tests and local development.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::domain::{
    carts::models::LineItem,
    products::models::{Category, NewProduct, Product, ProductId, ProductUpdate},
    sessions::models::{NewUserDocument, UserDocument, UserId},
};

mod http;
mod memory;

pub use http::{HttpDocumentStore, HttpStoreConfig};
pub use memory::MemoryDocumentStore;

/// Error returned by document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached, or the transport failed mid-request.
    #[error("network error talking to the document store")]
    Network(#[source] reqwest::Error),

    /// The store rejected the caller's credentials for this operation.
    #[error("permission denied by the document store")]
    PermissionDenied,

    /// The addressed document does not exist.
    #[error("document not found")]
    NotFound,

    /// Anything else: malformed responses, unexpected status codes.
    #[error("unexpected document store response: {0}")]
    Unexpected(String),
}

impl StoreError {
    /// The coarse kind of this error, for status reporting.
    #[must_use]
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::Network(_) => StoreErrorKind::Network,
            Self::PermissionDenied => StoreErrorKind::Permission,
            Self::NotFound => StoreErrorKind::NotFound,
            Self::Unexpected(_) => StoreErrorKind::Unknown,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error)
    }
}

/// Coarse, cloneable classification of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Network,
    Permission,
    NotFound,
    Unknown,
}

/// Field to order product listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
}

impl SortField {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Price => "price",
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Parameters for a product collection query.
///
/// Defaults mirror the storefront's listing call: newest first, at most 50
/// records, no category filter.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    /// Category equality filter, when the caller wants a pre-filtered fetch.
    pub category: Option<Category>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub limit: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            sort_field: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
            limit: 50,
        }
    }
}

impl ProductQuery {
    /// A query filtered to a single category, otherwise default parameters.
    #[must_use]
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }
}

/// A whole-field overwrite of the per-user document.
///
/// The store never patches inside these fields; each write replaces the
/// field's entire prior value.
#[derive(Debug, Clone)]
pub enum UserDocumentField {
    Cart(Vec<LineItem>),
    Wishlist(Vec<Product>),
    DisplayName(String),
}

impl UserDocumentField {
    /// The document field name this variant overwrites.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cart(_) => "cart",
            Self::Wishlist(_) => "wishlist",
            Self::DisplayName(_) => "displayName",
        }
    }
}

/// Client seam over the hosted document database.
#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Lists product records matching the query.
    async fn get_products(&self, query: ProductQuery) -> Result<Vec<Product>, StoreError>;

    /// Creates a product record; returns the store-issued id.
    async fn add_product(&self, product: NewProduct) -> Result<ProductId, StoreError>;

    /// Overwrites the given fields of a product record.
    async fn update_product(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<(), StoreError>;

    /// Deletes a product record.
    async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError>;

    /// Reads a user's document; `None` when no document exists yet.
    async fn get_user_document(&self, user: &UserId) -> Result<Option<UserDocument>, StoreError>;

    /// Creates (or recreates) a user's document with empty cart and wishlist.
    async fn create_user_document(
        &self,
        user: &UserId,
        document: NewUserDocument,
    ) -> Result<(), StoreError>;

    /// Overwrites a single field of a user's document.
    async fn set_user_document_field(
        &self,
        user: &UserId,
        field: UserDocumentField,
    ) -> Result<(), StoreError>;
}
