//! Product models

use jiff::Timestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product identifier, issued by the document store.
pub type ProductId = TypedId<Product>;

/// Catalog category as recorded in the store.
///
/// Legacy records may carry the coarse `wine` value, or no category at all;
/// both are tolerated by the catalog cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Whiskey,
    Wine,
    Red,
    White,
    Rose,
    Sparkling,
}

impl Category {
    /// The store-side string value of this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whiskey => "whiskey",
            Self::Wine => "wine",
            Self::Red => "red",
            Self::White => "white",
            Self::Rose => "rose",
            Self::Sparkling => "sparkling",
        }
    }

    /// Whether this category belongs to the wine side of the catalog.
    #[must_use]
    pub fn is_wine(self) -> bool {
        !matches!(self, Self::Whiskey)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product record as persisted in the remote store.
///
/// Read-only from the storefront's perspective; the only write the core ever
/// performs against it is the explicit image backfill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub details: FxHashMap<String, String>,
    #[serde(default)]
    pub tasting_notes: FxHashMap<String, String>,
    pub created_at: Timestamp,
}

/// Payload for creating a product record; the store issues the id and stamps
/// the creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub details: FxHashMap<String, String>,
    #[serde(default)]
    pub tasting_notes: FxHashMap<String, String>,
}

impl NewProduct {
    /// Materializes the record the store persists for this payload.
    #[must_use]
    pub fn into_product(self, id: ProductId, created_at: Timestamp) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            stock: self.stock,
            rating: self.rating,
            details: self.details,
            tasting_notes: self.tasting_notes,
            created_at,
        }
    }
}

/// Partial product update; each present field overwrites the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl ProductUpdate {
    /// An update that only replaces the image URL.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Applies the update to a stored record in place.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = Some(category);
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = Some(image_url);
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn category_round_trips_through_lowercase_json() -> TestResult {
        let json = serde_json::to_string(&Category::Sparkling)?;
        assert_eq!(json, "\"sparkling\"");

        let parsed: Category = serde_json::from_str("\"whiskey\"")?;
        assert_eq!(parsed, Category::Whiskey);

        Ok(())
    }

    #[test]
    fn product_tolerates_missing_category_and_image() -> TestResult {
        let json = r#"{
            "id": "p1",
            "name": "Mystery Bottle",
            "price": "19.99",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(json)?;

        assert_eq!(product.category, None);
        assert_eq!(product.image_url, None);
        assert_eq!(product.stock, 0);

        Ok(())
    }

    #[test]
    fn update_applies_only_present_fields() {
        let new = NewProduct {
            name: "Glen Example".to_string(),
            category: Some(Category::Whiskey),
            price: Decimal::new(2999, 2),
            description: "A fine dram.".to_string(),
            image_url: None,
            stock: 10,
            rating: 4.0,
            details: FxHashMap::default(),
            tasting_notes: FxHashMap::default(),
        };
        let mut product = new.into_product(ProductId::new("p1"), Timestamp::UNIX_EPOCH);

        ProductUpdate::image("https://img.example/glen.png").apply_to(&mut product);

        assert_eq!(
            product.image_url.as_deref(),
            Some("https://img.example/glen.png")
        );
        assert_eq!(product.name, "Glen Example");
        assert_eq!(product.price, Decimal::new(2999, 2));
    }
}
