//! Shop API client library
//!
//! Thin async clients for the shop backend's REST endpoints.

pub mod client;
pub mod config;
pub mod utils;

// Re-export commonly used items
pub use client::{
    address::AddressClient,
    order::{OrderClient, OrderFilters, OrderStatus},
    owned_product::OwnedProductClient,
    review::{ImageUpload, ReviewClient, ReviewForm},
    ApiError, ApiResponse, ShopClient, Transport,
};

pub use config::ClientConfig;
pub use utils::{init_tracing, init_tracing_with_level};
