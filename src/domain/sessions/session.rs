//! Session state

use crate::domain::{
    carts::state::CartState, sessions::models::UserId, wishlists::state::WishlistState,
};

/// The explicitly constructed per-session state container.
///
/// Owns the working copies of the cart and wishlist plus the identity of the
/// authenticated user, if any. Constructed at session start and torn down at
/// session end — never a module-level singleton, so tests and multiple
/// concurrent sessions stay tractable.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<UserId>,
    pub cart: CartState,
    pub wishlist: WishlistState,
}

impl Session {
    /// A fresh anonymous session with empty containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The authenticated user bound to this session, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub(crate) fn bind_user(&mut self, user: UserId) {
        self.user = Some(user);
    }

    pub(crate) fn unbind_user(&mut self) {
        self.user = None;
    }
}
