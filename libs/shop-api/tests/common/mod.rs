//! Common test utilities for Shop API integration tests

#![allow(dead_code)]

use shop_api::ShopClient;
use wiremock::{MockServer, Request};

pub const TOKEN: &str = "test-token";

pub const BEARER: &str = "Bearer test-token";

/// Start a mock backend and a client pointed at it
pub async fn setup() -> (MockServer, ShopClient) {
    let server = MockServer::start().await;
    let client = ShopClient::new(server.uri()).expect("mock server URI is valid");
    (server, client)
}

/// All requests the mock server saw, in arrival order
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}

pub fn body_text(request: &Request) -> String {
    String::from_utf8_lossy(&request.body).into_owned()
}

pub mod fixtures {
    //! Response bodies shaped like the backend's serializers

    use serde_json::{json, Value};

    pub fn order(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "order_number": format!("ORD{:06}", id),
            "status": status,
            "total_amount": "59.80",
            "payment_method": "mock",
            "items": [],
            "refund_request": null,
            "created_at": "2024-01-01T08:00:00+08:00"
        })
    }

    pub fn address(id: i64, is_default: bool) -> Value {
        json!({
            "id": id,
            "name": "Li Lei",
            "phone": "13800000000",
            "province": "Zhejiang",
            "city": "Hangzhou",
            "district": "Xihu",
            "address": "1 Wensan Road",
            "is_default": is_default
        })
    }

    pub fn not_found() -> Value {
        json!({ "detail": "Not found." })
    }
}
