//! Order review client
//!
//! Reviews are created and updated as `multipart/form-data` so images can
//! travel with the text fields.
//!
//! ```rust,ignore
//! use shop_api::client::review::{ImageUpload, ReviewForm, ReviewPayload};
//!
//! let form = ReviewForm::from_serializable(&ReviewPayload::new(17, "Fits well"))?
//!     .image(ImageUpload::from_path("photo.jpg").await?);
//! shop.reviews().create(form, &token).await?;
//! ```

mod client;
mod multipart;
mod types;

pub use client::{ReviewClient, REVIEWS_PATH};
pub use multipart::{FieldValue, FormPart, ImageUpload, ReviewForm, UPLOADED_IMAGES_FIELD};
pub use types::{Review, ReviewImage, ReviewPayload};
