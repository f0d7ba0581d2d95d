//! Checkout errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
}
