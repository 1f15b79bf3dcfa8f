//! Owned product client
//!
//! Products land in this list once an order completes; the backend
//! only allows listing and deleting records.

mod client;
mod types;

pub use client::{OwnedProductClient, OWNED_PRODUCTS_PATH};
pub use types::OwnedProduct;
