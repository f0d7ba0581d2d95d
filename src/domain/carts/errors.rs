//! Cart errors

use thiserror::Error;

/// Error raised by [`CartState`](super::state::CartState) mutations.
///
/// The container validates its own inputs rather than trusting callers to
/// guard before dispatching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("unknown delivery option `{0}`")]
    UnknownDeliveryOption(String),
}
