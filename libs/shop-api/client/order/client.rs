use super::super::error::Result;
use super::super::helpers::{action_path, detail_path, empty_body};
use super::super::response::ApiResponse;
use super::super::transport::Transport;
use super::types::OrderFilters;
use reqwest::Method;
use serde::Serialize;
use std::fmt::Display;

pub const ORDERS_PATH: &str = "/shopping/orders/";

/// Client for the user's orders
#[derive(Debug, Clone)]
pub struct OrderClient {
    transport: Transport,
}

impl OrderClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List orders matching the given filters
    pub async fn list(&self, filters: &OrderFilters, token: &str) -> Result<ApiResponse> {
        let params = filters.to_query_params();
        self.transport
            .get(ORDERS_PATH, &params, token, "Failed to fetch orders")
            .await
    }

    /// List all of the user's orders, no filters
    pub async fn list_mine(&self, token: &str) -> Result<ApiResponse> {
        self.transport
            .get(ORDERS_PATH, &[], token, "Failed to fetch orders")
            .await
    }

    /// Fetch a single order
    pub async fn detail(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        let path = detail_path(ORDERS_PATH, id);
        self.transport
            .get(&path, &[], token, "Failed to fetch order")
            .await
    }

    /// Create an order
    pub async fn create<T: Serialize + ?Sized>(&self, data: &T, token: &str) -> Result<ApiResponse> {
        self.transport
            .send_json(Method::POST, ORDERS_PATH, data, token, "Failed to create order")
            .await
    }

    /// Cancel an unpaid order
    pub async fn cancel(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        self.post_action(id, "cancel", token, "Failed to cancel order")
            .await
    }

    /// Ask for a refund on a paid or shipped order
    pub async fn request_refund<T: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &T,
        token: &str,
    ) -> Result<ApiResponse> {
        let path = action_path(ORDERS_PATH, id, "request_refund");
        self.transport
            .send_json(Method::POST, &path, data, token, "Failed to request refund")
            .await
    }

    /// Confirm that a shipped order was delivered
    pub async fn confirm_delivery(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        self.post_action(id, "confirm_delivery", token, "Failed to confirm delivery")
            .await
    }

    /// Pay for an order (simulated payment)
    pub async fn pay(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        self.post_action(id, "pay", token, "Failed to pay order")
            .await
    }

    /// Older confirmation endpoint, kept alongside `confirm_delivery`
    pub async fn confirm(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        self.post_action(id, "confirm", token, "Failed to confirm order")
            .await
    }

    async fn post_action(
        &self,
        id: impl Display,
        action: &str,
        token: &str,
        context: &str,
    ) -> Result<ApiResponse> {
        let path = action_path(ORDERS_PATH, id, action);
        self.transport
            .send_json(Method::POST, &path, &empty_body(), token, context)
            .await
    }
}
