//! Order client
//!
//! Covers listing, creation and the order actions (cancel, refund,
//! payment, delivery confirmation).
//!
//! ```rust,ignore
//! use shop_api::client::order::{OrderFilters, OrderStatus};
//!
//! let orders = shop.orders();
//! let paid = orders
//!     .list(&OrderFilters::new().with_status(OrderStatus::Paid), &token)
//!     .await?;
//! orders.pay(42, &token).await?;
//! ```

mod client;
mod types;

pub use client::{OrderClient, ORDERS_PATH};
pub use types::{
    CreateOrder, Order, OrderFilters, OrderItem, OrderStatus, PaymentMethod, RefundReason,
    RefundRecord, RefundRequest,
};
