//! Sample catalog
//!
//! Seed records for a fresh store, used by the admin CLI and the integration
//! tests. The set intentionally reproduces the data-quality conditions the
//! storefront has to tolerate: one product stored twice, records without
//! images, a record with a corrupted image URL, and a record with no
//! category.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::domain::products::models::{Category, NewProduct, ProductId};

/// Ids of long-gone records that earlier seeds created; deleted before
/// seeding.
#[must_use]
pub fn obsolete_product_ids() -> Vec<ProductId> {
    ["wine1", "wine2", "wine3", "wine4", "wine-rose1"]
        .into_iter()
        .map(ProductId::new)
        .collect()
}

/// The sample product set.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Jack Daniels Old No. 7".to_string(),
            category: Some(Category::Whiskey),
            price: Decimal::new(2999, 2),
            description: "Classic Tennessee whiskey with a smooth, rich flavor.".to_string(),
            image_url: Some(
                "https://www.oaks.delivery/wp-content/uploads/Jack-Daniels-Old-No7-cropped.webp"
                    .to_string(),
            ),
            stock: 50,
            rating: 4.5,
            details: map(&[
                ("origin", "Lynchburg, Tennessee, USA"),
                ("distillery", "Jack Daniel Distillery"),
                ("abv", "40%"),
                ("size", "750ml"),
                ("type", "Tennessee Whiskey"),
            ]),
            tasting_notes: map(&[
                ("nose", "Sweet vanilla, caramel, and oak with hints of banana"),
                ("palate", "Smooth, full-bodied with toasted oak and dark caramel"),
                ("finish", "Long and warm with lingering sweetness"),
            ]),
        },
        NewProduct {
            name: "Jameson Irish Whiskey".to_string(),
            category: Some(Category::Whiskey),
            price: Decimal::new(3499, 2),
            description: "Triple-distilled Irish whiskey with perfect balance.".to_string(),
            image_url: Some(
                "https://dayspringshop.com/wp-content/uploads/2024/05/DSC4620.jpg".to_string(),
            ),
            stock: 45,
            rating: 4.5,
            details: map(&[
                ("origin", "Cork, Ireland"),
                ("distillery", "Midleton Distillery"),
                ("abv", "40%"),
                ("size", "750ml"),
                ("type", "Blended Irish Whiskey"),
            ]),
            tasting_notes: map(&[
                ("nose", "Light floral fragrance with spicy wood notes"),
                ("palate", "Spicy, nutty and vanilla notes with sweet sherry"),
                ("finish", "Smooth and mellow with lingering warmth"),
            ]),
        },
        // The Macallan exists twice: the second record lost its image in an
        // old ingestion run. Listings must collapse the pair.
        NewProduct {
            name: "Macallan 12 Year".to_string(),
            category: Some(Category::Whiskey),
            price: Decimal::new(8999, 2),
            description: "Aged single malt Scotch with rich oak and fruit notes.".to_string(),
            image_url: Some(
                "https://dayspringshop.com/wp-content/uploads/2024/05/DSC4620.jpg".to_string(),
            ),
            stock: 30,
            rating: 4.5,
            details: map(&[
                ("origin", "Speyside, Scotland"),
                ("distillery", "The Macallan Distillery"),
                ("age", "12 Years"),
                ("abv", "43%"),
                ("type", "Single Malt Scotch Whisky"),
            ]),
            tasting_notes: map(&[
                ("nose", "Vanilla, dried fruits and sherry with wood smoke"),
                ("palate", "Rich dried fruits and spice with chocolate orange"),
                ("finish", "Long and rich with sweet toffee and spice"),
            ]),
        },
        NewProduct {
            name: "Macallan 12 Year".to_string(),
            category: Some(Category::Whiskey),
            price: Decimal::new(8999, 2),
            description: "Aged single malt Scotch with rich oak and fruit notes.".to_string(),
            image_url: None,
            stock: 30,
            rating: 4.5,
            details: map(&[
                ("origin", "Speyside, Scotland"),
                ("distillery", "The Macallan Distillery"),
                ("age", "12 Years"),
                ("abv", "43%"),
                ("type", "Single Malt Scotch Whisky"),
            ]),
            tasting_notes: map(&[
                ("nose", "Vanilla, dried fruits and sherry with wood smoke"),
                ("palate", "Rich dried fruits and spice with chocolate orange"),
                ("finish", "Long and rich with sweet toffee and spice"),
            ]),
        },
        NewProduct {
            name: "Glenfiddich 15 Year".to_string(),
            category: Some(Category::Whiskey),
            price: Decimal::new(6499, 2),
            description: "Scotch single malt matured in three cask types.".to_string(),
            image_url: None,
            stock: 25,
            rating: 4.4,
            details: map(&[
                ("origin", "Dufftown, Scotland"),
                ("distillery", "Glenfiddich Distillery"),
                ("age", "15 Years"),
                ("abv", "40%"),
                ("type", "Single Malt Scotch Whisky"),
            ]),
            tasting_notes: map(&[
                ("nose", "Honey, vanilla and dark fruit"),
                ("palate", "Silky with layers of sherry and marzipan"),
                ("finish", "Satisfyingly rich with lingering sweetness"),
            ]),
        },
        NewProduct {
            name: "Crown Royal".to_string(),
            category: Some(Category::Whiskey),
            price: Decimal::new(2799, 2),
            description: "Smooth Canadian whisky with a distinctive blend.".to_string(),
            // Corrupted by an old ingestion bug; the backfill repairs it.
            image_url: Some("https://img.example/undefined/crown-royal.png".to_string()),
            stock: 40,
            rating: 4.2,
            details: map(&[
                ("origin", "Manitoba, Canada"),
                ("abv", "40%"),
                ("size", "750ml"),
                ("type", "Canadian Whisky"),
            ]),
            tasting_notes: map(&[
                ("nose", "Delicate aromas of vanilla and fruit"),
                ("palate", "Creamy with hints of oak and sweet vanilla"),
                ("finish", "Long and lingering with a light smoothness"),
            ]),
        },
        NewProduct {
            name: "Napa Valley Cabernet Sauvignon".to_string(),
            category: Some(Category::Red),
            price: Decimal::new(4599, 2),
            description: "Full-bodied red with notes of blackcurrant and cedar.".to_string(),
            image_url: Some(
                "https://cdn.shopify.com/s/files/1/0028/9669/1264/files/I26705-10_900x.png"
                    .to_string(),
            ),
            stock: 60,
            rating: 4.6,
            details: map(&[
                ("region", "Napa Valley, California"),
                ("vintage", "2019"),
                ("abv", "14.5%"),
                ("size", "750ml"),
            ]),
            tasting_notes: map(&[
                ("nose", "Blackcurrant, cedar and a hint of vanilla"),
                ("palate", "Ripe dark fruit with firm, polished tannins"),
                ("finish", "Long with cocoa and toasted oak"),
            ]),
        },
        NewProduct {
            name: "Marlborough Sauvignon Blanc".to_string(),
            category: Some(Category::White),
            price: Decimal::new(1999, 2),
            description: "Crisp white with gooseberry and citrus freshness.".to_string(),
            image_url: Some(
                "https://www.sauvignonjohn.com/cdn/shop/products/sauvignon-blanc.png".to_string(),
            ),
            stock: 80,
            rating: 4.3,
            details: map(&[
                ("region", "Marlborough, New Zealand"),
                ("vintage", "2022"),
                ("abv", "13%"),
                ("size", "750ml"),
            ]),
            tasting_notes: map(&[
                ("nose", "Gooseberry, passionfruit and cut grass"),
                ("palate", "Zesty citrus with vibrant acidity"),
                ("finish", "Clean and refreshing"),
            ]),
        },
        NewProduct {
            name: "Provence Rosé".to_string(),
            category: Some(Category::Rose),
            price: Decimal::new(2499, 2),
            description: "Pale, dry rosé with delicate red berry notes.".to_string(),
            image_url: None,
            stock: 55,
            rating: 4.1,
            details: map(&[
                ("region", "Provence, France"),
                ("vintage", "2022"),
                ("abv", "12.5%"),
                ("size", "750ml"),
            ]),
            tasting_notes: map(&[
                ("nose", "Strawberry, peach and white flowers"),
                ("palate", "Dry and elegant with red berry fruit"),
                ("finish", "Crisp mineral finish"),
            ]),
        },
        NewProduct {
            name: "Prosecco Superiore".to_string(),
            category: Some(Category::Sparkling),
            price: Decimal::new(1899, 2),
            description: "Lively sparkling wine with green apple and pear.".to_string(),
            image_url: Some("https://i.ibb.co/C6v0XZv/prosecco.png".to_string()),
            stock: 70,
            rating: 4.0,
            details: map(&[
                ("region", "Valdobbiadene, Italy"),
                ("abv", "11%"),
                ("size", "750ml"),
            ]),
            tasting_notes: map(&[
                ("nose", "Green apple, pear and acacia blossom"),
                ("palate", "Fine bubbles with fresh orchard fruit"),
                ("finish", "Bright and clean"),
            ]),
        },
        // A legacy record: coarse category, so listings rely on keyword
        // inference to place it under red.
        NewProduct {
            name: "Estate Merlot".to_string(),
            category: Some(Category::Wine),
            price: Decimal::new(2199, 2),
            description: "Soft, plummy merlot from an old estate block.".to_string(),
            image_url: Some(
                "https://www.maset.com/cdnassets/products/red-wines/lg/bottle/merlot.png"
                    .to_string(),
            ),
            stock: 35,
            rating: 3.9,
            details: map(&[("region", "Colchagua, Chile"), ("abv", "13.5%")]),
            tasting_notes: map(&[
                ("nose", "Plum and black cherry"),
                ("palate", "Soft tannins and ripe dark fruit"),
                ("finish", "Gentle and rounded"),
            ]),
        },
        // An uncategorized stray; visible under "all" only.
        NewProduct {
            name: "Cellar Master's Mystery Lot".to_string(),
            category: None,
            price: Decimal::new(999, 2),
            description: "Unlabelled lot from a cellar clearance.".to_string(),
            image_url: None,
            stock: 5,
            rating: 0.0,
            details: FxHashMap::default(),
            tasting_notes: FxHashMap::default(),
        },
    ]
}

fn map(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}
