//! Carts

pub mod errors;
pub mod models;
pub mod state;

pub use errors::CartError;
pub use models::{DeliveryOption, LineItem, OrderTotals};
pub use state::CartState;
