//! Weather provider interface and wttr.in client.

use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use vesper_protocol::ToolError;

/// Default endpoint for the plain-text weather service.
const DEFAULT_ENDPOINT: &str = "http://wttr.in";
/// Bound on each weather lookup.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Weather provider interface for current-conditions lookups.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch a one-line summary of current conditions for a city.
    async fn current(&self, city: &str) -> Result<String, ToolError>;
}

/// Plain-text GET client for the wttr.in weather service.
#[derive(Debug, Clone)]
pub struct WttrClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WttrClient {
    /// Create a client against the public endpoint.
    pub fn new() -> Result<Self, ToolError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, REQUEST_TIMEOUT)
    }

    /// Create a client against an alternate endpoint with a custom bound.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WttrClient {
    async fn current(&self, city: &str) -> Result<String, ToolError> {
        let response = self
            .http
            .get(format!("{}/{city}", self.endpoint))
            .query(&[("format", "3")])
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Upstream {
                status: status.as_u16(),
            });
        }
        let line = response.text().await.map_err(transport_error)?;
        let line = line.trim().to_string();
        debug!("weather fetched (city={}, len={})", city, line.len());
        Ok(line)
    }
}

/// Map reqwest transport failures onto tool errors.
pub(crate) fn transport_error(err: reqwest::Error) -> ToolError {
    if err.is_timeout() {
        ToolError::Timeout(err.to_string())
    } else {
        ToolError::ExecutionFailed(err.to_string())
    }
}
