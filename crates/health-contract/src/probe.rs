//! Single health request.

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::checks::HealthResponse;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("load duration {0:?} is out of range")]
    DurationOutOfRange(Duration),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// One timed request/response pair
#[derive(Debug, Clone)]
pub struct Sample {
    pub response: HealthResponse,
    pub elapsed: Duration,
}

impl Sample {
    /// Anything outside 2xx/3xx counts as a failed request
    pub fn is_failed(&self) -> bool {
        !(200..400).contains(&self.response.status)
    }
}

pub fn build_client(timeout: Duration) -> Result<Client, ProbeError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ProbeError::Client)
}

/// GET `url` and capture status, content type and body
pub async fn probe(client: &Client, url: &str) -> Result<Sample, ProbeError> {
    let start = Instant::now();
    let request_error = |source: reqwest::Error| ProbeError::Request {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(request_error)?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.map_err(request_error)?;
    let elapsed = start.elapsed();

    debug!("GET {} -> {} in {:?}", url, status, elapsed);

    Ok(Sample {
        response: HealthResponse {
            status,
            content_type,
            body,
        },
        elapsed,
    })
}
