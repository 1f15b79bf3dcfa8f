//! Shared HTTP transport used by every resource client
//!
//! Owns the base URL and a pooled `reqwest::Client`. Cloning a transport
//! shares the connection pool, so resource clients hold their own copy.
//! Every request carries the caller's bearer token; nothing about the
//! credential is kept between calls.

use super::error::{ApiError, Result};
use super::helpers::require_success;
use super::response::ApiResponse;
use crate::config::ClientConfig;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// HTTP transport shared by the resource clients
#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
    client: Client,
}

impl Transport {
    /// Create a transport with default timeouts
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    /// Create a transport from configuration
    ///
    /// The configuration is validated first, so a zero timeout is reported
    /// here instead of failing every request.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(config.base_url.clone())?;
        config
            .validate()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs));

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build().map_err(ApiError::ClientBuild)?;
        Ok(Self { base_url, client })
    }

    /// Wrap an existing `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.into())?,
            client,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.client.request(method, url).bearer_auth(token)
    }

    async fn execute(&self, request: RequestBuilder, context: &str) -> Result<ApiResponse> {
        let response = request.send().await?;
        let response = require_success(response, context).await?;
        ApiResponse::read(response).await
    }

    /// GET with optional query parameters
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        token: &str,
        context: &str,
    ) -> Result<ApiResponse> {
        let mut request = self.request(Method::GET, path, token);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request, context).await
    }

    /// Send a JSON-encoded body
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        token: &str,
        context: &str,
    ) -> Result<ApiResponse> {
        let request = self.request(method, path, token).json(body);
        self.execute(request, context).await
    }

    /// Send a `multipart/form-data` body
    pub async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        form: Form,
        token: &str,
        context: &str,
    ) -> Result<ApiResponse> {
        let request = self.request(method, path, token).multipart(form);
        self.execute(request, context).await
    }

    /// DELETE without a body
    pub async fn delete(&self, path: &str, token: &str, context: &str) -> Result<ApiResponse> {
        let request = self.request(Method::DELETE, path, token);
        self.execute(request, context).await
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let parsed =
        Url::parse(&raw).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{}: unsupported scheme '{}'",
            raw,
            parsed.scheme()
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let transport = Transport::new("http://localhost:8000/api/").unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000/api");
        assert_eq!(
            transport.url("/addresses/"),
            "http://localhost:8000/api/addresses/"
        );
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = Transport::new("/api").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = Transport::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_from_config_rejects_zero_timeouts() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        let err = Transport::from_config(&config).unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)));

        let config = ClientConfig {
            connect_timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(matches!(
            Transport::from_config(&config),
            Err(ApiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_config_applies_valid_settings() {
        let config = ClientConfig {
            timeout_secs: 5,
            user_agent: Some("shopfront-test".to_string()),
            ..ClientConfig::new("https://shop.example.com/api/")
        };
        let transport = Transport::from_config(&config).unwrap();
        assert_eq!(transport.base_url(), "https://shop.example.com/api");
    }

    #[test]
    fn test_with_client_reuses_pool() {
        let client = Client::new();
        let transport = Transport::with_client("https://shop.example.com", client).unwrap();
        let cloned = transport.clone();
        assert_eq!(cloned.base_url(), "https://shop.example.com");
    }
}
