//! Address request and response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for creating or updating an address
///
/// An order snapshots `name`, `phone` and `address` into its `receiver_*` fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressPayload {
    /// Receiver name
    pub name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub district: String,
    /// Street and house number
    pub address: String,
    #[serde(default)]
    pub is_default: bool,
}

impl AddressPayload {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    /// Set province, city and district in one go
    pub fn with_region(
        mut self,
        province: impl Into<String>,
        city: impl Into<String>,
        district: impl Into<String>,
    ) -> Self {
        self.province = province.into();
        self.city = city.into();
        self.district = district.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Address as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub province: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub district: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
