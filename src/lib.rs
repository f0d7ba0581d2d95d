//! Storefront session core for a wine & whiskey retailer.
//!
//! Provides the product catalog cache, the cart and wishlist state
//! containers, their synchronization with a hosted per-user document store,
//! and a simulated checkout. Rendering, routing and authentication UI are
//! external concerns; this crate is what their event handlers call into.

pub mod context;
pub mod domain;
pub mod fixtures;
pub mod ids;
pub mod store;

#[cfg(test)]
mod test;

pub use context::AppContext;
pub use domain::{carts, checkout, products, sessions, sync, wishlists};
