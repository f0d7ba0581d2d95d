//! Session synchronization service
//!
//! Bridges the local cart/wishlist containers and the remote per-user
//! document. Local edits always succeed first; these operations persist or
//! restore them explicitly, and a failure never corrupts local state.
//!
//! There is no version check between the two sides: a fetch that resolves
//! after a newer local edit overwrites that edit, and overlapping pushes race
//! at the store with the last write winning. This is the documented
//! consistency gap of the per-user document, not something this layer papers
//! over.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    domain::{
        carts::state::CartState,
        sessions::{
            models::{NewUserDocument, UserId},
            session::Session,
        },
        sync::{SyncFailure, SyncStatus},
        wishlists::state::WishlistState,
    },
    store::{DocumentStore, StoreError, UserDocumentField},
};

/// Fetch/push operations between a [`Session`]'s containers and the user's
/// remote document.
#[derive(Clone)]
pub struct SessionSync {
    store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for SessionSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSync").finish_non_exhaustive()
    }
}

impl SessionSync {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Replaces the local cart with the user's remote cart.
    ///
    /// A user with no document yet yields an empty cart. On failure the local
    /// items are left untouched and the cart's sync status records the error.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`].
    pub async fn fetch_cart(&self, user: &UserId, cart: &mut CartState) -> Result<(), StoreError> {
        cart.set_sync_status(SyncStatus::Pending);
        debug!(user = %user, "fetching remote cart");

        match self.store.get_user_document(user).await {
            Ok(document) => {
                let items = document.map(|doc| doc.cart).unwrap_or_default();
                cart.replace_items(items);
                cart.set_sync_status(SyncStatus::Succeeded);
                Ok(())
            }
            Err(error) => {
                cart.set_sync_status(SyncStatus::Failed(SyncFailure::from(&error)));
                Err(error)
            }
        }
    }

    /// Writes the full local cart snapshot to the user's document,
    /// replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`]; no retry is attempted.
    pub async fn push_cart(&self, user: &UserId, cart: &mut CartState) -> Result<(), StoreError> {
        cart.set_sync_status(SyncStatus::Pending);
        debug!(user = %user, items = cart.len(), "pushing cart snapshot");

        let snapshot = cart.items().to_vec();
        match self
            .store
            .set_user_document_field(user, UserDocumentField::Cart(snapshot))
            .await
        {
            Ok(()) => {
                cart.set_sync_status(SyncStatus::Succeeded);
                Ok(())
            }
            Err(error) => {
                cart.set_sync_status(SyncStatus::Failed(SyncFailure::from(&error)));
                Err(error)
            }
        }
    }

    /// Replaces the local wishlist with the user's remote wishlist.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`]; local items stay untouched.
    pub async fn fetch_wishlist(
        &self,
        user: &UserId,
        wishlist: &mut WishlistState,
    ) -> Result<(), StoreError> {
        wishlist.set_sync_status(SyncStatus::Pending);
        debug!(user = %user, "fetching remote wishlist");

        match self.store.get_user_document(user).await {
            Ok(document) => {
                let items = document.map(|doc| doc.wishlist).unwrap_or_default();
                wishlist.replace_items(items);
                wishlist.set_sync_status(SyncStatus::Succeeded);
                Ok(())
            }
            Err(error) => {
                wishlist.set_sync_status(SyncStatus::Failed(SyncFailure::from(&error)));
                Err(error)
            }
        }
    }

    /// Writes the full local wishlist snapshot to the user's document.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`]; no retry is attempted.
    pub async fn push_wishlist(
        &self,
        user: &UserId,
        wishlist: &mut WishlistState,
    ) -> Result<(), StoreError> {
        wishlist.set_sync_status(SyncStatus::Pending);
        debug!(user = %user, items = wishlist.len(), "pushing wishlist snapshot");

        let snapshot = wishlist.items().to_vec();
        match self
            .store
            .set_user_document_field(user, UserDocumentField::Wishlist(snapshot))
            .await
        {
            Ok(()) => {
                wishlist.set_sync_status(SyncStatus::Succeeded);
                Ok(())
            }
            Err(error) => {
                wishlist.set_sync_status(SyncStatus::Failed(SyncFailure::from(&error)));
                Err(error)
            }
        }
    }

    /// Binds `user` to the session and loads both containers from the remote
    /// document.
    ///
    /// A user logging in for the first time has no document yet; one is
    /// created from `profile` with empty cart and wishlist. On failure the
    /// session stays anonymous and its containers keep their local contents.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`].
    pub async fn login(
        &self,
        session: &mut Session,
        user: UserId,
        profile: NewUserDocument,
    ) -> Result<(), StoreError> {
        session.cart.set_sync_status(SyncStatus::Pending);
        session.wishlist.set_sync_status(SyncStatus::Pending);

        let document = match self.store.get_user_document(&user).await {
            Ok(Some(document)) => Some(document),
            Ok(None) => {
                debug!(user = %user, "no user document yet, creating one");
                match self.store.create_user_document(&user, profile).await {
                    Ok(()) => None,
                    Err(error) => return Err(record_login_failure(session, error)),
                }
            }
            Err(error) => return Err(record_login_failure(session, error)),
        };

        let (cart_items, wishlist_items) = document
            .map(|doc| (doc.cart, doc.wishlist))
            .unwrap_or_default();

        session.cart.replace_items(cart_items);
        session.wishlist.replace_items(wishlist_items);
        session.cart.set_sync_status(SyncStatus::Succeeded);
        session.wishlist.set_sync_status(SyncStatus::Succeeded);
        session.bind_user(user);

        Ok(())
    }

    /// Clears both containers and unbinds the user.
    ///
    /// The remote document keeps the last pushed state; the next login
    /// restores it. Nothing is pushed here, so unsaved local edits are
    /// discarded.
    pub fn logout(&self, session: &mut Session) {
        if let Some(user) = session.user() {
            debug!(user = %user, "logging out, clearing local containers");
        }

        session.cart.clear();
        session.wishlist.clear();
        session.cart.set_sync_status(SyncStatus::Idle);
        session.wishlist.set_sync_status(SyncStatus::Idle);
        session.unbind_user();
    }
}

fn record_login_failure(session: &mut Session, error: StoreError) -> StoreError {
    warn!(error = %error, "login synchronization failed");

    let failure = SyncFailure::from(&error);
    session
        .cart
        .set_sync_status(SyncStatus::Failed(failure.clone()));
    session
        .wishlist
        .set_sync_status(SyncStatus::Failed(failure));

    error
}

#[cfg(test)]
mod tests {
    use mockall::predicate::always;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        store::{DocumentStore as _, MockDocumentStore, StoreErrorKind},
        test::{context::TestContext, helpers::whiskey},
    };

    use super::*;

    fn profile() -> NewUserDocument {
        NewUserDocument {
            display_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn push_then_fetch_round_trips_the_cart() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.create_user("u1").await?;

        let mut cart = CartState::new();
        cart.add_item(whiskey("w1", "Jameson Irish Whiskey", Decimal::new(3499, 2)), 2)?;
        ctx.sync.push_cart(&user, &mut cart).await?;

        let mut restored = CartState::new();
        ctx.sync.fetch_cart(&user, &mut restored).await?;

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.total(), Decimal::new(6998, 2));
        assert_eq!(*restored.sync_status(), SyncStatus::Succeeded);

        Ok(())
    }

    #[tokio::test]
    async fn fetch_discards_unpushed_local_mutations() -> TestResult {
        // The documented last-write-wins race: a fetch resolving after local
        // edits overwrites them wholesale, with no merge or version check.
        let ctx = TestContext::new();
        let user = ctx.create_user("u1").await?;

        let mut cart = CartState::new();
        cart.add_item(whiskey("w1", "Macallan 12 Year", Decimal::new(8999, 2)), 1)?;
        ctx.sync.push_cart(&user, &mut cart).await?;

        cart.add_item(whiskey("w2", "Lagavulin 16", Decimal::new(9999, 2)), 1)?;
        ctx.sync.fetch_cart(&user, &mut cart).await?;

        assert_eq!(cart.len(), 1, "the unpushed local edit must be overwritten");
        assert_eq!(cart.total(), Decimal::new(8999, 2));

        Ok(())
    }

    #[tokio::test]
    async fn fetch_for_user_without_document_yields_empty_cart() -> TestResult {
        let ctx = TestContext::new();
        let user = UserId::new("ghost");

        let mut cart = CartState::new();
        cart.add_item(whiskey("w1", "Crown Royal", Decimal::new(2799, 2)), 1)?;
        ctx.sync.fetch_cart(&user, &mut cart).await?;

        assert!(cart.is_empty(), "an absent document reads as an empty cart");

        Ok(())
    }

    #[tokio::test]
    async fn failed_fetch_leaves_local_items_untouched() -> TestResult {
        let mut store = MockDocumentStore::new();
        store
            .expect_get_user_document()
            .with(always())
            .returning(|_| Err(StoreError::PermissionDenied));
        let sync = SessionSync::new(std::sync::Arc::new(store));

        let mut cart = CartState::new();
        cart.add_item(whiskey("w1", "Glenlivet 12", Decimal::new(4599, 2)), 1)?;

        let result = sync.fetch_cart(&UserId::new("u1"), &mut cart).await;

        assert!(matches!(result, Err(StoreError::PermissionDenied)));
        assert_eq!(cart.len(), 1, "a failed fetch must not overwrite the cart");
        match cart.sync_status() {
            SyncStatus::Failed(failure) => {
                assert_eq!(failure.kind, StoreErrorKind::Permission);
            }
            other => return Err(format!("expected Failed status, got {other:?}").into()),
        }

        Ok(())
    }

    #[tokio::test]
    async fn push_to_missing_document_surfaces_not_found() -> TestResult {
        let ctx = TestContext::new();
        let user = UserId::new("ghost");

        let mut cart = CartState::new();
        cart.add_item(whiskey("w1", "Highland Park 12", Decimal::new(5499, 2)), 1)?;

        let result = ctx.sync.push_cart(&user, &mut cart).await;

        assert!(matches!(result, Err(StoreError::NotFound)));
        assert!(cart.sync_status().is_failed());

        Ok(())
    }

    #[tokio::test]
    async fn wishlist_round_trips_and_preserves_toggle_state() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.create_user("u1").await?;

        let mut wishlist = WishlistState::new();
        wishlist.toggle(whiskey("w1", "Chivas Regal 12", Decimal::new(3299, 2)));
        ctx.sync.push_wishlist(&user, &mut wishlist).await?;

        let mut restored = WishlistState::new();
        ctx.sync.fetch_wishlist(&user, &mut restored).await?;

        assert_eq!(restored.len(), 1);
        assert!(restored.contains(&"w1".into()));

        Ok(())
    }

    #[tokio::test]
    async fn login_loads_both_containers_from_the_document() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.create_user("u1").await?;

        let mut seeded_cart = CartState::new();
        seeded_cart.add_item(whiskey("w1", "Jack Daniels Old No. 7", Decimal::new(2999, 2)), 1)?;
        ctx.sync.push_cart(&user, &mut seeded_cart).await?;

        let mut session = Session::new();
        ctx.sync.login(&mut session, user.clone(), profile()).await?;

        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&user));
        assert_eq!(session.cart.len(), 1);
        assert!(session.wishlist.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn first_login_creates_the_user_document() -> TestResult {
        let ctx = TestContext::new();
        let user = UserId::new("new-user");

        let mut session = Session::new();
        ctx.sync.login(&mut session, user.clone(), profile()).await?;

        let document = ctx
            .store
            .get_user_document(&user)
            .await?
            .ok_or("login should have created the document")?;

        assert_eq!(document.display_name, "Test User");
        assert!(document.cart.is_empty());
        assert!(session.is_authenticated());

        Ok(())
    }

    #[tokio::test]
    async fn logout_clears_containers_and_identity() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.create_user("u1").await?;

        let mut session = Session::new();
        ctx.sync.login(&mut session, user, profile()).await?;
        session
            .cart
            .add_item(whiskey("w1", "Glenfiddich 15 Year", Decimal::new(6499, 2)), 1)?;

        ctx.sync.logout(&mut session);

        assert!(!session.is_authenticated());
        assert!(session.cart.is_empty());
        assert!(session.wishlist.is_empty());
        assert_eq!(*session.cart.sync_status(), SyncStatus::Idle);

        Ok(())
    }
}
