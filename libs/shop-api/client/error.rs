use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Status code returned by the server, if the request got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::RequestFailed(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_exposes_code() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"detail":"Not found."}"#.to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let err = ApiError::InvalidPayload("not an object".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
