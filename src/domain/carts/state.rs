//! Cart state container
//!
//! The working copy of the user's cart for the active session. All mutations
//! are synchronous and keep the derived total exact; remote persistence is a
//! separate, explicitly invoked operation on the sync layer.

use rust_decimal::Decimal;

use crate::domain::{
    carts::{
        errors::CartError,
        models::{DeliveryOption, LineItem, OrderTotals},
    },
    products::models::{Product, ProductId},
    sync::SyncStatus,
};

/// Session-local cart: ordered line items, a derived total, and the selected
/// delivery option.
///
/// Invariants:
/// - at most one line item per product id;
/// - every quantity is at least 1 (a decrement to zero removes the line);
/// - `total()` always equals the sum of `price × quantity` over the items.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    items: Vec<LineItem>,
    total: Decimal,
    delivery: Option<DeliveryOption>,
    shipping_address: Option<String>,
    sync: SyncStatus,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order, which is also display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Derived total over the current line items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The currently selected delivery option, if any.
    #[must_use]
    pub fn delivery_option(&self) -> Option<DeliveryOption> {
        self.delivery
    }

    /// The shipping address captured during checkout, if any.
    #[must_use]
    pub fn shipping_address(&self) -> Option<&str> {
        self.shipping_address.as_deref()
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

    /// Adds `quantity` of `product` to the cart.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line item is appended. Stock limits are not enforced
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(LineItem { product, quantity }),
        }

        self.recompute_total();

        Ok(())
    }

    /// Removes the line item for `id`; a no-op when the product is not in the
    /// cart.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| item.product.id != *id);
        self.recompute_total();
    }

    /// Sets the quantity on the line item for `id`.
    ///
    /// A quantity of zero removes the line item — a zero-quantity row never
    /// persists. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == *id) {
            item.quantity = quantity;
        }

        self.recompute_total();
    }

    /// Selects a delivery option by its key.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownDeliveryOption`] when the key is not in
    /// the fixed option table.
    pub fn set_delivery_option(&mut self, key: &str) -> Result<(), CartError> {
        let option = DeliveryOption::from_key(key)
            .ok_or_else(|| CartError::UnknownDeliveryOption(key.to_string()))?;

        self.delivery = Some(option);

        Ok(())
    }

    /// Sets or clears the shipping address.
    pub fn set_shipping_address(&mut self, address: Option<String>) {
        self.shipping_address = address;
    }

    /// Empties the cart: items, total, delivery option and address.
    ///
    /// Invoked after a successful checkout and at logout.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Decimal::ZERO;
        self.delivery = None;
        self.shipping_address = None;
    }

    /// Computes `{subtotal, delivery fee, total}` from the current state.
    ///
    /// Pure and on demand — never cached. The fee is zero while no delivery
    /// option is selected.
    #[must_use]
    pub fn order_totals(&self) -> OrderTotals {
        let subtotal = self.items.iter().map(LineItem::line_total).sum();
        let delivery_fee = self.delivery.map_or(Decimal::ZERO, DeliveryOption::fee);

        OrderTotals {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    /// Replaces the entire line-item sequence with a fetched snapshot.
    ///
    /// Last write wins: anything mutated locally since the fetch started is
    /// overwritten.
    pub(crate) fn replace_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
        self.recompute_total();
    }

    pub(crate) fn set_sync_status(&mut self, status: SyncStatus) {
        self.sync = status;
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(LineItem::line_total).sum();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::helpers::{product, whiskey};

    use super::*;

    #[test]
    fn add_item_appends_and_totals() -> TestResult {
        let mut cart = CartState::new();
        let bottle = whiskey("w1", "Jack Daniels Old No. 7", Decimal::new(2999, 2));

        cart.add_item(bottle, 1)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Decimal::new(2999, 2));

        Ok(())
    }

    #[test]
    fn adding_the_same_product_twice_merges_quantities() -> TestResult {
        let mut cart = CartState::new();
        let bottle = whiskey("w1", "Jameson Irish Whiskey", Decimal::new(3499, 2));

        cart.add_item(bottle.clone(), 1)?;
        cart.add_item(bottle, 1)?;

        assert_eq!(cart.len(), 1, "same product must collapse into one line");
        let line = cart.items().first().ok_or("cart should have one line")?;
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.total(), Decimal::new(6998, 2));

        Ok(())
    }

    #[test]
    fn add_item_rejects_zero_quantity() {
        let mut cart = CartState::new();
        let bottle = whiskey("w1", "Macallan 12 Year", Decimal::new(8999, 2));

        let result = cart.add_item(bottle, 0);

        assert_eq!(result, Err(CartError::InvalidQuantity));
        assert!(cart.is_empty(), "rejected add must not touch the cart");
    }

    #[test]
    fn total_tracks_every_mutation() -> TestResult {
        let mut cart = CartState::new();
        let a = whiskey("a", "Bottle A", Decimal::new(1000, 2));
        let b = whiskey("b", "Bottle B", Decimal::new(2550, 2));

        cart.add_item(a.clone(), 2)?;
        assert_eq!(cart.total(), Decimal::new(2000, 2));

        cart.add_item(b, 1)?;
        assert_eq!(cart.total(), Decimal::new(4550, 2));

        cart.set_quantity(&a.id, 1);
        assert_eq!(cart.total(), Decimal::new(3550, 2));

        cart.remove_item(&a.id);
        assert_eq!(cart.total(), Decimal::new(2550, 2));

        Ok(())
    }

    #[test]
    fn set_quantity_zero_removes_the_line() -> TestResult {
        let mut cart = CartState::new();
        let bottle = whiskey("w1", "Glenfiddich 15 Year", Decimal::new(6499, 2));

        cart.add_item(bottle.clone(), 3)?;
        cart.set_quantity(&bottle.id, 0);

        assert!(cart.is_empty(), "zero quantity must remove the line item");
        assert_eq!(cart.total(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn set_quantity_unknown_id_is_a_no_op() -> TestResult {
        let mut cart = CartState::new();
        let bottle = whiskey("w1", "Highland Park 12", Decimal::new(5499, 2));

        cart.add_item(bottle, 1)?;
        cart.set_quantity(&ProductId::new("missing"), 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Decimal::new(5499, 2));

        Ok(())
    }

    #[test]
    fn delivery_option_rejects_unknown_keys() {
        let mut cart = CartState::new();

        let result = cart.set_delivery_option("teleport");

        assert_eq!(
            result,
            Err(CartError::UnknownDeliveryOption("teleport".to_string()))
        );
        assert_eq!(cart.delivery_option(), None);
    }

    #[test]
    fn order_totals_add_the_selected_delivery_fee() -> TestResult {
        let mut cart = CartState::new();
        cart.add_item(product("p1", "Cabernet", Decimal::new(2599, 2)), 1)?;
        cart.add_item(product("p2", "Riesling", Decimal::new(1999, 2)), 1)?;
        cart.set_delivery_option("standard_shipping")?;

        let totals = cart.order_totals();

        assert_eq!(totals.subtotal, Decimal::new(4598, 2));
        assert_eq!(totals.delivery_fee, Decimal::new(1500, 2));
        assert_eq!(totals.total, Decimal::new(6098, 2));

        Ok(())
    }

    #[test]
    fn order_totals_without_delivery_have_zero_fee() -> TestResult {
        let mut cart = CartState::new();
        cart.add_item(product("p1", "Prosecco", Decimal::new(1899, 2)), 2)?;

        let totals = cart.order_totals();

        assert_eq!(totals.delivery_fee, Decimal::ZERO);
        assert_eq!(totals.total, totals.subtotal);

        Ok(())
    }

    #[test]
    fn clear_resets_everything() -> TestResult {
        let mut cart = CartState::new();
        cart.add_item(product("p1", "Malbec", Decimal::new(2199, 2)), 1)?;
        cart.set_delivery_option("ubereats")?;
        cart.set_shipping_address(Some("12 Vine St".to_string()));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.delivery_option(), None);
        assert_eq!(cart.shipping_address(), None);

        Ok(())
    }

    #[test]
    fn end_to_end_add_add_remove() -> TestResult {
        let mut cart = CartState::new();
        let a = whiskey("a", "Jack Daniels Old No. 7", Decimal::new(2999, 2));
        let b = whiskey("b", "Jameson Irish Whiskey", Decimal::new(3499, 2));

        cart.add_item(a.clone(), 1)?;
        cart.add_item(b.clone(), 2)?;
        cart.remove_item(&a.id);

        assert_eq!(cart.len(), 1);
        let line = cart.items().first().ok_or("cart should have one line")?;
        assert_eq!(line.product.id, b.id);
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.total(), Decimal::new(6998, 2));

        Ok(())
    }
}
