//! Memory service interface and the hosted-store HTTP client.

use crate::error::MemoryError;
use crate::model::MemoryRecord;
use async_trait::async_trait;
use log::debug;
use serde_json::{Value, json};
use std::time::Duration;
use vesper_protocol::ChatTurn;

/// Default base URL for the hosted memory store API.
const DEFAULT_BASE_URL: &str = "https://api.mem0.ai/v1";
/// Bound on every round trip to the store.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
/// Associative memory store abstraction, scoped by owner identity.
///
/// Every call is a fresh round trip; implementations hold no mutable
/// cross-call state and are safe to share across concurrent tool calls.
pub trait MemoryService: Send + Sync {
    /// Persist conversation turns as memory input for an owner.
    async fn add(&self, turns: &[ChatTurn], owner: &str) -> Result<(), MemoryError>;

    /// Search the owner's memories with a free-text query.
    async fn search(&self, query: &str, owner: &str) -> Result<Vec<MemoryRecord>, MemoryError>;

    /// Fetch all memories stored for an owner.
    async fn get_all(&self, owner: &str) -> Result<Vec<MemoryRecord>, MemoryError>;
}

/// HTTP client for the hosted memory store.
#[derive(Debug, Clone)]
pub struct Mem0Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Mem0Client {
    /// Create a client against the hosted store endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, MemoryError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate endpoint.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, MemoryError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Authorization header value for the store API.
    fn auth_header(&self) -> String {
        format!("Token {}", self.api_key)
    }

    /// Decode a success response body into records, erroring on bad status.
    async fn records_from_response(
        response: reqwest::Response,
    ) -> Result<Vec<MemoryRecord>, MemoryError> {
        let status = response.status();
        if !status.is_success() {
            return Err(MemoryError::Status(status.as_u16()));
        }
        let body: Value = response.json().await?;
        Ok(parse_records(&body))
    }
}

#[async_trait]
impl MemoryService for Mem0Client {
    async fn add(&self, turns: &[ChatTurn], owner: &str) -> Result<(), MemoryError> {
        let response = self
            .http
            .post(format!("{}/memories/", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&json!({ "messages": turns, "user_id": owner }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MemoryError::Status(status.as_u16()));
        }
        debug!("stored turns (owner={}, count={})", owner, turns.len());
        Ok(())
    }

    async fn search(&self, query: &str, owner: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
        let response = self
            .http
            .post(format!("{}/memories/search/", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&json!({ "query": query, "user_id": owner }))
            .send()
            .await?;
        let records = Self::records_from_response(response).await?;
        debug!(
            "memory search (owner={}, returned={})",
            owner,
            records.len()
        );
        Ok(records)
    }

    async fn get_all(&self, owner: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
        let response = self
            .http
            .get(format!("{}/memories/", self.base_url))
            .header("Authorization", self.auth_header())
            .query(&[("user_id", owner)])
            .send()
            .await?;
        let records = Self::records_from_response(response).await?;
        debug!(
            "memory get_all (owner={}, returned={})",
            owner,
            records.len()
        );
        Ok(records)
    }
}

/// Extract memory records from a store response body.
///
/// The store returns either a bare array or an object wrapping one under
/// `results`. Elements without a `memory` field are skipped.
pub(crate) fn parse_records(body: &Value) -> Vec<MemoryRecord> {
    let items = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    };
    items
        .iter()
        .filter_map(|item| {
            let memory = item.get("memory")?.as_str()?.to_string();
            let updated_at = item
                .get("updated_at")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Some(MemoryRecord { memory, updated_at })
        })
        .collect()
}
