//! Order models

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::carts::models::{DeliveryOption, LineItem, OrderTotals},
    ids::TypedId,
};

/// Identifier of a placed order.
pub type OrderId = TypedId<Order>;

/// A placed (simulated) order: the cart contents and totals frozen at the
/// moment of checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<LineItem>,
    pub delivery_option: Option<DeliveryOption>,
    pub shipping_address: Option<String>,
    pub totals: OrderTotals,
    pub placed_at: Timestamp,
}
