use super::super::error::Result;
use super::super::helpers::detail_path;
use super::super::response::ApiResponse;
use super::super::transport::Transport;
use super::multipart::ReviewForm;
use reqwest::Method;
use std::fmt::Display;
use tracing::debug;

pub const REVIEWS_PATH: &str = "/shopping/order-reviews/";

/// Client for the user's order reviews
#[derive(Debug, Clone)]
pub struct ReviewClient {
    transport: Transport,
}

impl ReviewClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List the user's reviews
    pub async fn list_mine(&self, token: &str) -> Result<ApiResponse> {
        self.transport
            .get(REVIEWS_PATH, &[], token, "Failed to fetch reviews")
            .await
    }

    /// Create a review, uploading any attached images
    pub async fn create(&self, form: ReviewForm, token: &str) -> Result<ApiResponse> {
        debug!("Sending review form with {} parts", form.part_count());
        let form = form.into_multipart()?;
        self.transport
            .send_multipart(Method::POST, REVIEWS_PATH, form, token, "Failed to create review")
            .await
    }

    /// Update a review; attached images are added to the existing ones
    pub async fn update(&self, id: impl Display, form: ReviewForm, token: &str) -> Result<ApiResponse> {
        let path = detail_path(REVIEWS_PATH, id);
        debug!("Sending review form with {} parts", form.part_count());
        let form = form.into_multipart()?;
        self.transport
            .send_multipart(Method::PUT, &path, form, token, "Failed to update review")
            .await
    }

    /// Delete a review
    pub async fn delete(&self, id: impl Display, token: &str) -> Result<ApiResponse> {
        let path = detail_path(REVIEWS_PATH, id);
        self.transport
            .delete(&path, token, "Failed to delete review")
            .await
    }

    /// Delete one image from a review
    pub async fn delete_image(
        &self,
        review_id: impl Display,
        image_id: impl Display,
        token: &str,
    ) -> Result<ApiResponse> {
        let path = review_image_path(review_id, image_id);
        self.transport
            .delete(&path, token, "Failed to delete review image")
            .await
    }
}

fn review_image_path(review_id: impl Display, image_id: impl Display) -> String {
    format!("{}{}/images/{}/", REVIEWS_PATH, review_id, image_id)
}
