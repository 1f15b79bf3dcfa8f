use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product the user owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedProduct {
    pub id: i64,

    /// SKU code
    pub sku: String,

    #[serde(default)]
    pub spu_name: Option<String>,

    #[serde(default)]
    pub sku_title: Option<String>,

    /// Absolute image URL, SKU image first then the SPU main image
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub purchased_at: Option<DateTime<Utc>>,
}
