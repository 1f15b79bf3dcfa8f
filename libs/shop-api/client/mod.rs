//! Shop API clients
//!
//! One client per backend collection (addresses, orders, owned products,
//! reviews), all sharing a single [`Transport`]. Every call takes the
//! caller's bearer token and issues exactly one request.

pub mod address;
pub mod error;
pub mod helpers;
pub mod order;
pub mod owned_product;
pub mod response;
pub mod review;
pub mod transport;

pub use address::{Address, AddressClient, AddressPayload};
pub use error::{ApiError, Result};
pub use order::{
    CreateOrder, Order, OrderClient, OrderFilters, OrderItem, OrderStatus, PaymentMethod,
    RefundReason, RefundRecord, RefundRequest,
};
pub use owned_product::{OwnedProduct, OwnedProductClient};
pub use response::ApiResponse;
pub use review::{ImageUpload, Review, ReviewClient, ReviewForm, ReviewImage, ReviewPayload};
pub use transport::Transport;

use crate::config::ClientConfig;

/// Entry point handing out the resource clients
#[derive(Debug, Clone)]
pub struct ShopClient {
    transport: Transport,
}

impl ShopClient {
    /// Create a client with default timeouts
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(Transport::new(base_url)?))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Transport::from_config(config)?))
    }

    pub fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn addresses(&self) -> AddressClient {
        AddressClient::new(self.transport.clone())
    }

    pub fn orders(&self) -> OrderClient {
        OrderClient::new(self.transport.clone())
    }

    pub fn owned_products(&self) -> OwnedProductClient {
        OwnedProductClient::new(self.transport.clone())
    }

    pub fn reviews(&self) -> ReviewClient {
        ReviewClient::new(self.transport.clone())
    }
}
