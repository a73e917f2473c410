//! Fetch Transport
//!
//! `reqwest` client (browser fetch on wasm) bound to the page origin.

use reqwest::header::CONTENT_TYPE;

use super::{ApiError, ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone, Debug)]
pub struct FetchTransport {
    client: reqwest::Client,
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Resolve API paths against `window.location.origin`
    pub fn from_window() -> Result<Self, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| ApiError::Network(format!("no origin: {:?}", e)))?;
        Ok(Self::new(origin))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .client
            .request(request.method.into(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = FetchTransport::new("http://localhost:8000/");
        assert_eq!(transport.base_url, "http://localhost:8000");
    }
}
