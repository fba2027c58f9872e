//! Search provider interface and DuckDuckGo client.

use crate::weather::transport_error;
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use vesper_protocol::ToolError;

/// Default endpoint for the instant-answer search service.
const DEFAULT_ENDPOINT: &str = "https://api.duckduckgo.com/";
/// Bound on each search round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One search hit: a text summary and its source URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    /// Human-readable summary text.
    pub text: String,
    /// Source URL.
    pub url: String,
}

/// Search provider interface for web queries.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a query and return candidate hits in relevance order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ToolError>;
}

/// JSON GET client for the DuckDuckGo instant-answer API.
#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoClient {
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
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ToolError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Upstream {
                status: status.as_u16(),
            });
        }
        let body: Value = response.json().await.map_err(transport_error)?;
        let hits = parse_related_topics(&body);
        debug!("web search (query_len={}, hits={})", query.len(), hits.len());
        Ok(hits)
    }
}

/// Extract hits from a `RelatedTopics` payload.
///
/// Topics arrive either as flat `{Text, FirstURL}` objects or as grouped
/// `{Topics: [...]}` entries one level deep.
pub(crate) fn parse_related_topics(body: &Value) -> Vec<SearchHit> {
    let Some(topics) = body.get("RelatedTopics").and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut hits = Vec::new();
    for topic in topics {
        if let Some(hit) = hit_from_topic(topic) {
            hits.push(hit);
        } else if let Some(group) = topic.get("Topics").and_then(Value::as_array) {
            hits.extend(group.iter().filter_map(hit_from_topic));
        }
    }
    hits
}

/// Read a single `{Text, FirstURL}` topic, if both fields are present.
fn hit_from_topic(topic: &Value) -> Option<SearchHit> {
    let text = topic.get("Text")?.as_str()?.to_string();
    let url = topic.get("FirstURL")?.as_str()?.to_string();
    Some(SearchHit { text, url })
}
