use super::super::error::Result;
use super::super::helpers::detail_path;
use super::super::response::ApiResponse;
use super::super::transport::Transport;
use std::fmt::Display;

pub const OWNED_PRODUCTS_PATH: &str = "/shopping/owned-products/";

/// Client for products the user has bought
#[derive(Debug, Clone)]
pub struct OwnedProductClient {
    transport: Transport,
}

impl OwnedProductClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List the user's owned products
    pub async fn list_mine(&self, token: &str) -> Result<ApiResponse> {
        self.transport
            .get(OWNED_PRODUCTS_PATH, &[], token, "Failed to fetch owned products")
            .await
    }

    /// Remove an ownership record
    pub async fn delete(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        let path = detail_path(OWNED_PRODUCTS_PATH, id);
        self.transport
            .delete(&path, token, "Failed to delete owned product")
            .await
    }
}
