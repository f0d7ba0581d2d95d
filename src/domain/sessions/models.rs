//! User document models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{carts::models::LineItem, products::models::Product},
    ids::TypedId,
};

/// Identifier of an authenticated user, issued by the hosted auth provider.
pub type UserId = TypedId<UserDocument>;

/// The per-user document: the durable copy of cart and wishlist, shared
/// across sessions and devices.
///
/// No version or revision field exists on this document; concurrent writers
/// race and the last write wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub cart: Vec<LineItem>,
    #[serde(default)]
    pub wishlist: Vec<Product>,
    pub created_at: Timestamp,
}

/// Profile data for creating a user document on registration or first social
/// login; cart and wishlist start empty and the store stamps the creation
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDocument {
    pub display_name: String,
    pub email: String,
}

impl NewUserDocument {
    /// Materializes the document the store persists for this profile.
    #[must_use]
    pub fn into_document(self, created_at: Timestamp) -> UserDocument {
        UserDocument {
            display_name: self.display_name,
            email: self.email,
            cart: Vec::new(),
            wishlist: Vec::new(),
            created_at,
        }
    }
}
