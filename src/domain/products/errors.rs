//! Catalog errors

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog entry with the requested id, after de-duplication.
    #[error("product not found")]
    NotFound,

    /// The remote fetch or write failed; no partial listing is returned.
    #[error("catalog operation failed")]
    Store(#[from] StoreError),
}
