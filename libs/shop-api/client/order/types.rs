//! Order types: status enums, request bodies, filters and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Enums
// =============================================================================

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Convert to API query string value
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    /// Only unpaid orders can be cancelled
    pub fn is_cancellable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Paid or shipped orders accept a refund request
    pub fn is_refundable(&self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Shipped)
    }

    /// Shipped orders wait for the buyer to confirm delivery
    pub fn awaits_delivery_confirmation(&self) -> bool {
        matches!(self, OrderStatus::Shipped)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "shipped" => Ok(OrderStatus::Shipped),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            "refunded" => Ok(OrderStatus::Refunded),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Alipay,
    Wechat,
    Stripe,
    /// Simulated payment (backend default)
    #[default]
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    NotReceived,
    NotAsDescribed,
    QualityIssue,
    WrongItem,
    Other,
}

// =============================================================================
// Request bodies
// =============================================================================

/// Body for creating an order from cart items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrder {
    pub address_id: i64,
    pub cart_item_ids: Vec<i64>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl CreateOrder {
    pub fn new(address_id: i64, cart_item_ids: Vec<i64>) -> Self {
        Self {
            address_id,
            cart_item_ids,
            payment_method: PaymentMethod::default(),
            remark: None,
        }
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}

/// Body for a refund request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefundRequest {
    pub reason: RefundReason,
    pub description: String,
}

impl RefundRequest {
    pub fn new(reason: RefundReason, description: impl Into<String>) -> Self {
        Self {
            reason,
            description: description.into(),
        }
    }
}

// =============================================================================
// Filters
// =============================================================================

/// Query filters for listing orders
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    /// Filter by status
    pub status: Option<OrderStatus>,

    /// Additional raw parameters passed through as-is
    pub extra: Vec<(String, String)>,
}

impl OrderFilters {
    /// Create new empty filters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Add a parameter the typed fields don't cover
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Convert filters to query parameters
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(status) = &self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }

        params.extend(self.extra.iter().cloned());
        params
    }
}

// =============================================================================
// Response models
// =============================================================================

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub sku: String,
    pub sku_title: String,
    pub spu_name: String,
    /// Decimal amount as sent by the backend, e.g. "19.90"
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub is_reviewed: bool,

    #[serde(default)]
    pub can_review: bool,

    #[serde(default)]
    pub review: Option<serde_json::Value>,
}

/// Refund request attached to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRecord {
    pub id: i64,
    pub reason: RefundReason,
    pub description: String,
    pub refund_amount: String,
    /// pending, approved, rejected or completed
    pub status: String,

    #[serde(default)]
    pub order_number: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub admin_remark: Option<String>,
}

/// Order as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub status: OrderStatus,
    pub total_amount: String,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub receiver_name: Option<String>,

    #[serde(default)]
    pub receiver_phone: Option<String>,

    #[serde(default)]
    pub receiver_province: Option<String>,

    #[serde(default)]
    pub receiver_city: Option<String>,

    #[serde(default)]
    pub receiver_district: Option<String>,

    #[serde(default)]
    pub receiver_address: Option<String>,

    /// Full address line as formatted by the backend
    #[serde(default)]
    pub shipping_address: Option<String>,

    #[serde(default)]
    pub shipping_company: Option<String>,

    #[serde(default)]
    pub tracking_number: Option<String>,

    #[serde(default)]
    pub remark: Option<String>,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(default)]
    pub refund_request: Option<RefundRecord>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub shipped_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    /// Action flags computed by the backend
    #[serde(default)]
    pub can_cancel: Option<bool>,

    #[serde(default)]
    pub can_refund: Option<bool>,

    #[serde(default)]
    pub can_confirm: Option<bool>,
}

impl Order {
    /// Backend's `can_cancel` flag, or the status rule when it is missing
    pub fn is_cancellable(&self) -> bool {
        self.can_cancel.unwrap_or_else(|| self.status.is_cancellable())
    }

    /// Backend's `can_refund` flag, or refundable status with no prior request
    pub fn can_request_refund(&self) -> bool {
        self.can_refund
            .unwrap_or_else(|| self.status.is_refundable() && self.refund_request.is_none())
    }

    /// Backend's `can_confirm` flag, or the status rule when it is missing
    pub fn awaits_delivery_confirmation(&self) -> bool {
        self.can_confirm
            .unwrap_or_else(|| self.status.awaits_delivery_confirmation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        assert_eq!("paid".parse::<OrderStatus>().unwrap(), OrderStatus::Paid);
        assert_eq!("SHIPPED".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert!("lost".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_status_rules() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(!OrderStatus::Paid.is_cancellable());
        assert!(OrderStatus::Paid.is_refundable());
        assert!(OrderStatus::Shipped.is_refundable());
        assert!(!OrderStatus::Completed.is_refundable());
        assert!(OrderStatus::Shipped.awaits_delivery_confirmation());
    }

    #[test]
    fn test_filters_to_query_params() {
        let params = OrderFilters::new()
            .with_status(OrderStatus::Paid)
            .with_param("page", "2")
            .to_query_params();

        assert_eq!(
            params,
            vec![
                ("status".to_string(), "paid".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
        assert!(OrderFilters::new().to_query_params().is_empty());
    }

    #[test]
    fn test_create_order_serialization() {
        let body = CreateOrder::new(4, vec![10, 11]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["payment_method"], "mock");
        assert!(json.get("remark").is_none());

        let json = serde_json::to_value(
            body.with_payment_method(PaymentMethod::Alipay)
                .with_remark("leave at door"),
        )
        .unwrap();
        assert_eq!(json["payment_method"], "alipay");
        assert_eq!(json["remark"], "leave at door");
    }

    #[test]
    fn test_refund_reason_serialization() {
        let body = RefundRequest::new(RefundReason::NotAsDescribed, "wrong colour");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["reason"], "not_as_described");
    }

    #[test]
    fn test_order_deserialization() {
        let raw = r#"{
            "id": 12,
            "order_number": "ORD20240101001",
            "status": "paid",
            "status_display": "Paid",
            "total_amount": "59.80",
            "items": [{
                "id": 1, "sku": "SKU-1", "sku_title": "Blue / M", "spu_name": "Tee",
                "price": "29.90", "quantity": 2, "subtotal": "59.80",
                "image": null, "is_reviewed": false, "can_review": false, "review": null
            }],
            "refund_request": null,
            "created_at": "2024-01-01T08:00:00+08:00",
            "paid_at": null
        }"#;

        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert!(order.can_request_refund());
        assert!(!order.is_cancellable());
        assert!(!order.awaits_delivery_confirmation());
        assert_eq!(
            order.created_at.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_server_flags_take_precedence() {
        let raw = r#"{
            "id": 7,
            "order_number": "ORD20240101007",
            "status": "paid",
            "total_amount": "10.00",
            "receiver_name": "Li Lei",
            "receiver_phone": "13800000000",
            "receiver_province": "Zhejiang",
            "receiver_city": "Hangzhou",
            "receiver_district": "Xihu",
            "receiver_address": "1 Wensan Road",
            "can_cancel": false,
            "can_refund": false,
            "can_confirm": false
        }"#;

        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.receiver_city.as_deref(), Some("Hangzhou"));
        assert_eq!(order.receiver_address.as_deref(), Some("1 Wensan Road"));
        assert_eq!(order.can_refund, Some(false));
        // Status alone would allow a refund
        assert!(order.status.is_refundable());
        assert!(!order.can_request_refund());
        assert!(!order.is_cancellable());
        assert!(!order.awaits_delivery_confirmation());
    }
}
