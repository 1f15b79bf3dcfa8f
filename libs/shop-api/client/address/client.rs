use super::super::error::Result;
use super::super::helpers::{action_path, detail_path, empty_body};
use super::super::response::ApiResponse;
use super::super::transport::Transport;
use reqwest::Method;
use serde::Serialize;
use std::fmt::Display;

pub const ADDRESSES_PATH: &str = "/addresses/";

/// Client for the user's shipping addresses
#[derive(Debug, Clone)]
pub struct AddressClient {
    transport: Transport,
}

impl AddressClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List the user's addresses
    pub async fn list(&self, token: &str) -> Result<ApiResponse> {
        self.transport
            .get(ADDRESSES_PATH, &[], token, "Failed to fetch addresses")
            .await
    }

    /// Create an address
    pub async fn create<T: Serialize + ?Sized>(&self, data: &T, token: &str) -> Result<ApiResponse> {
        self.transport
            .send_json(Method::POST, ADDRESSES_PATH, data, token, "Failed to create address")
            .await
    }

    /// Replace an address
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &T,
        token: &str,
    ) -> Result<ApiResponse> {
        let path = detail_path(ADDRESSES_PATH, id);
        self.transport
            .send_json(Method::PUT, &path, data, token, "Failed to update address")
            .await
    }

    /// Delete an address
    ///
    /// Deleting an address twice surfaces the backend's 404 as-is.
    pub async fn delete(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        let path = detail_path(ADDRESSES_PATH, id);
        self.transport
            .delete(&path, token, "Failed to delete address")
            .await
    }

    /// Mark an address as the default one
    pub async fn set_default(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        let path = action_path(ADDRESSES_PATH, id, "set-default");
        self.transport
            .send_json(
                Method::POST,
                &path,
                &empty_body(),
                token,
                "Failed to set default address",
            )
            .await
    }
}
