//! Test Helpers

use jiff::Timestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::domain::products::models::{Category, NewProduct, Product, ProductId};

/// A product snapshot with no category and no image.
pub(crate) fn product(id: &str, name: &str, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: None,
        price,
        description: String::new(),
        image_url: None,
        stock: 10,
        rating: 4.0,
        details: FxHashMap::default(),
        tasting_notes: FxHashMap::default(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// A whiskey snapshot with a stock image.
pub(crate) fn whiskey(id: &str, name: &str, price: Decimal) -> Product {
    Product {
        category: Some(Category::Whiskey),
        image_url: Some(format!("https://img.example/{id}.png")),
        ..product(id, name, price)
    }
}

/// A wine-side snapshot with a stock image.
pub(crate) fn wine(id: &str, name: &str, category: Category, price: Decimal) -> Product {
    Product {
        category: Some(category),
        image_url: Some(format!("https://img.example/{id}.png")),
        ..product(id, name, price)
    }
}

/// A creation payload with no category and no image.
pub(crate) fn new_product(name: &str, category: Option<Category>, price: Decimal) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category,
        price,
        description: String::new(),
        image_url: None,
        stock: 10,
        rating: 4.0,
        details: FxHashMap::default(),
        tasting_notes: FxHashMap::default(),
    }
}

/// A whiskey creation payload with a stock image.
pub(crate) fn new_whiskey(name: &str, price: Decimal) -> NewProduct {
    NewProduct {
        image_url: Some("https://img.example/whiskey-bottle.png".to_string()),
        ..new_product(name, Some(Category::Whiskey), price)
    }
}

/// A wine-side creation payload with a stock image.
pub(crate) fn new_wine(name: &str, category: Category, price: Decimal) -> NewProduct {
    NewProduct {
        image_url: Some("https://img.example/wine-bottle.png".to_string()),
        ..new_product(name, Some(category), price)
    }
}
