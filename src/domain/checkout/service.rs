//! Checkout service
//!
//! Simulated order placement: no payment gateway is contacted and no stock is
//! decremented. The order is assembled from the cart, the cart is cleared,
//! and for a logged-in user the emptied cart is pushed remotely.

use jiff::Timestamp;
use tracing::{info, warn};

use crate::domain::{
    checkout::{
        errors::CheckoutError,
        models::{Order, OrderId},
    },
    sessions::{service::SessionSync, session::Session},
};

/// Places simulated orders against a session.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    sync: SessionSync,
}

impl CheckoutService {
    #[must_use]
    pub fn new(sync: SessionSync) -> Self {
        Self { sync }
    }

    /// Places an order from the session's cart.
    ///
    /// The cart is cleared locally whatever happens afterwards; a failure to
    /// push the emptied cart is recorded on the cart's sync status and logged
    /// rather than failing the order, so the user is never blocked on a
    /// remote error after a successful checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to order.
    pub async fn place_order(&self, session: &mut Session) -> Result<Order, CheckoutError> {
        if session.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order {
            id: OrderId::generate(),
            items: session.cart.items().to_vec(),
            delivery_option: session.cart.delivery_option(),
            shipping_address: session.cart.shipping_address().map(str::to_string),
            totals: session.cart.order_totals(),
            placed_at: Timestamp::now(),
        };

        session.cart.clear();
        info!(order = %order.id, total = %order.totals.total, "order placed");

        if let Some(user) = session.user().cloned() {
            if let Err(error) = self.sync.push_cart(&user, &mut session.cart).await {
                warn!(user = %user, error = %error, "failed to push emptied cart after checkout");
            }
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::sessions::models::NewUserDocument,
        store::DocumentStore as _,
        test::{context::TestContext, helpers::whiskey},
    };

    use super::*;

    #[tokio::test]
    async fn placing_an_order_freezes_totals_and_clears_the_cart() -> TestResult {
        let ctx = TestContext::new();
        let mut session = Session::new();

        session
            .cart
            .add_item(whiskey("a", "Jack Daniels Old No. 7", Decimal::new(2999, 2)), 1)?;
        session
            .cart
            .add_item(whiskey("b", "Jameson Irish Whiskey", Decimal::new(3499, 2)), 2)?;
        session.cart.set_delivery_option("express_shipping")?;

        let order = ctx.checkout.place_order(&mut session).await?;

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.totals.subtotal, Decimal::new(9997, 2));
        assert_eq!(order.totals.delivery_fee, Decimal::new(2500, 2));
        assert_eq!(order.totals.total, Decimal::new(12497, 2));
        assert!(session.cart.is_empty(), "checkout must clear the cart");
        assert_eq!(session.cart.delivery_option(), None);

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_cannot_check_out() {
        let ctx = TestContext::new();
        let mut session = Session::new();

        let result = ctx.checkout.place_order(&mut session).await;

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[tokio::test]
    async fn checkout_pushes_the_emptied_cart_for_a_logged_in_user() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.create_user("u1").await?;

        let mut session = Session::new();
        ctx.sync
            .login(
                &mut session,
                user.clone(),
                NewUserDocument {
                    display_name: "Test User".to_string(),
                    email: "test@example.com".to_string(),
                },
            )
            .await?;

        session
            .cart
            .add_item(whiskey("a", "Macallan 12 Year", Decimal::new(8999, 2)), 1)?;
        ctx.sync.push_cart(&user, &mut session.cart).await?;

        ctx.checkout.place_order(&mut session).await?;

        let document = ctx
            .store
            .get_user_document(&user)
            .await?
            .ok_or("user document should exist")?;
        assert!(
            document.cart.is_empty(),
            "the remote cart must be emptied after checkout"
        );

        Ok(())
    }
}
