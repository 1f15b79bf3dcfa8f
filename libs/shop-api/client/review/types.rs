//! Review request and response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scalar review fields
///
/// Unset fields serialize as `null` and are therefore left out of the
/// multipart form built by `ReviewForm::from_serializable`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewPayload {
    /// Order item being reviewed (create only)
    pub order_item: Option<i64>,
    pub content: Option<String>,
    pub rating: Option<u8>,
}

impl ReviewPayload {
    pub fn new(order_item: i64, content: impl Into<String>) -> Self {
        Self {
            order_item: Some(order_item),
            content: Some(content.into()),
            rating: None,
        }
    }

    /// Payload for editing the text of an existing review
    pub fn edit(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Image attached to a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewImage {
    pub id: i64,

    #[serde(default)]
    pub image: Option<String>,

    /// Absolute URL when the backend can build one
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Review as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub order_item: i64,
    pub content: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub user_avatar: Option<String>,

    #[serde(default)]
    pub spu: Option<i64>,

    #[serde(default)]
    pub spu_name: Option<String>,

    #[serde(default)]
    pub images: Vec<ReviewImage>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
