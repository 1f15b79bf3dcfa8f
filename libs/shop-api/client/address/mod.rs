//! Shipping address client
//!
//! ```rust,ignore
//! use shop_api::client::address::{AddressClient, AddressPayload};
//!
//! let addresses = shop.addresses();
//! let list = addresses.list(&token).await?;
//! addresses.set_default(7, &token).await?;
//! ```

mod client;
mod types;

pub use client::{AddressClient, ADDRESSES_PATH};
pub use types::{Address, AddressPayload};
