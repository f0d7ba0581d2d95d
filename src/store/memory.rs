//! In-memory document store
//!
//! Implements the same query semantics as the hosted service, for tests and
//! local development. State lives behind a mutex; nothing is persisted.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::{
    domain::{
        products::models::{NewProduct, Product, ProductId, ProductUpdate},
        sessions::models::{NewUserDocument, UserDocument, UserId},
    },
    store::{DocumentStore, ProductQuery, SortField, SortOrder, StoreError, UserDocumentField},
};

/// A process-local [`DocumentStore`].
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    users: FxHashMap<UserId, UserDocument>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another test thread panicked mid-write;
        // the plain data inside is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_products(&self, query: ProductQuery) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner();

        let mut matched: Vec<Product> = inner
            .products
            .iter()
            .filter(|product| {
                query
                    .category
                    .is_none_or(|category| product.category == Some(category))
            })
            .cloned()
            .collect();

        match (query.sort_field, query.sort_order) {
            (SortField::CreatedAt, SortOrder::Asc) => {
                matched.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            }
            (SortField::CreatedAt, SortOrder::Desc) => {
                matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            (SortField::Price, SortOrder::Asc) => matched.sort_by(|a, b| a.price.cmp(&b.price)),
            (SortField::Price, SortOrder::Desc) => matched.sort_by(|a, b| b.price.cmp(&a.price)),
        }

        matched.truncate(query.limit);

        Ok(matched)
    }

    async fn add_product(&self, product: NewProduct) -> Result<ProductId, StoreError> {
        let id = ProductId::generate();
        let record = product.into_product(id.clone(), Timestamp::now());

        self.inner().products.push(record);

        Ok(id)
    }

    async fn update_product(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner();

        let record = inner
            .products
            .iter_mut()
            .find(|product| product.id == *id)
            .ok_or(StoreError::NotFound)?;

        update.apply_to(record);

        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner();

        let before = inner.products.len();
        inner.products.retain(|product| product.id != *id);

        if inner.products.len() == before {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn get_user_document(&self, user: &UserId) -> Result<Option<UserDocument>, StoreError> {
        Ok(self.inner().users.get(user).cloned())
    }

    async fn create_user_document(
        &self,
        user: &UserId,
        document: NewUserDocument,
    ) -> Result<(), StoreError> {
        let record = document.into_document(Timestamp::now());
        self.inner().users.insert(user.clone(), record);

        Ok(())
    }

    async fn set_user_document_field(
        &self,
        user: &UserId,
        field: UserDocumentField,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner();

        let document = inner.users.get_mut(user).ok_or(StoreError::NotFound)?;

        match field {
            UserDocumentField::Cart(items) => document.cart = items,
            UserDocumentField::Wishlist(items) => document.wishlist = items,
            UserDocumentField::DisplayName(name) => document.display_name = name,
        }

        Ok(())
    }
}
