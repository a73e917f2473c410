//! Items API Client
//!
//! HTTP bindings to the items backend, split into a transport seam and
//! typed item calls.

mod item;
mod transport;

use serde::de::DeserializeOwned;

use crate::models::ErrorBody;

pub use item::TodoApi;
pub use transport::FetchTransport;

// ========================
// Request / Response
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request relative to the API origin (path includes any query string)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a raw response into its JSON body.
    ///
    /// Non-2xx becomes `ApiError::Status` carrying `detail` or `HTTP <status>`;
    /// 204 (or an empty 2xx body) yields `None`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        if !self.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&self.body)
                .ok()
                .and_then(|b| b.detail);
            return Err(ApiError::Status {
                status: self.status,
                message: detail.unwrap_or_else(|| format!("HTTP {}", self.status)),
            });
        }
        if self.status == 204 || self.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.body)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// ========================
// Errors
// ========================

/// Failed API call. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

// ========================
// Transport seam
// ========================

/// Sends one request and returns the raw response.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_error_uses_detail() {
        let err = response(400, r#"{"detail":"title is required"}"#)
            .into_json::<Item>()
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 400, message: "title is required".to_string() });
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn test_error_falls_back_to_status_code() {
        let err = response(502, "<html>bad gateway</html>").into_json::<Item>().unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");

        let err = response(404, "{}").into_json::<Item>().unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn test_no_content_has_no_body() {
        assert_eq!(response(204, "").into_json::<Item>().unwrap(), None);
    }

    #[test]
    fn test_success_decodes_body() {
        let item = response(200, r#"{"id":3,"title":"C","done":true}"#)
            .into_json::<Item>()
            .unwrap()
            .unwrap();
        assert_eq!(item.title, "C");
        assert!(item.done);
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = response(200, "not json").into_json::<Item>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
