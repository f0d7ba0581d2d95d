//! Cart models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::products::models::Product;

/// A cart line: a denormalized product snapshot plus a quantity.
///
/// The snapshot is deliberate — a later catalog price change does not reprice
/// an item already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Fixed delivery option table.
///
/// Process-wide constant configuration, not user data; fees and estimates are
/// flat per option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOption {
    Ubereats,
    Foodpanda,
    StandardShipping,
    ExpressShipping,
}

impl DeliveryOption {
    /// Every delivery option, in display order.
    pub const ALL: [Self; 4] = [
        Self::Ubereats,
        Self::Foodpanda,
        Self::StandardShipping,
        Self::ExpressShipping,
    ];

    /// The stable key this option is persisted and selected by.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Ubereats => "ubereats",
            Self::Foodpanda => "foodpanda",
            Self::StandardShipping => "standard_shipping",
            Self::ExpressShipping => "express_shipping",
        }
    }

    /// Looks up an option by its key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.key() == key)
    }

    /// Human-readable name for UI display.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ubereats => "UberEats",
            Self::Foodpanda => "Foodpanda",
            Self::StandardShipping => "Standard Shipping",
            Self::ExpressShipping => "Express Shipping",
        }
    }

    /// Flat delivery fee for this option.
    #[must_use]
    pub fn fee(self) -> Decimal {
        match self {
            Self::Ubereats => Decimal::new(599, 2),
            Self::Foodpanda => Decimal::new(499, 2),
            Self::StandardShipping => Decimal::new(1500, 2),
            Self::ExpressShipping => Decimal::new(2500, 2),
        }
    }

    /// Delivery time estimate shown next to the fee.
    #[must_use]
    pub fn estimated_time(self) -> &'static str {
        match self {
            Self::Ubereats => "30-45 minutes",
            Self::Foodpanda => "35-50 minutes",
            Self::StandardShipping => "2-3 business days",
            Self::ExpressShipping => "Next business day",
        }
    }
}

impl std::fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Order totals derived from the cart at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}
