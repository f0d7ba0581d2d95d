//! Wishlists

pub mod state;

pub use state::WishlistState;
