use async_trait::async_trait;
use vesper_protocol::ToolError;
use vesper_tools::{SearchHit, SearchProvider, WeatherProvider};

/// Weather provider double that always returns the same summary line.
#[derive(Clone)]
pub struct StaticWeather {
    summary: Option<String>,
}

impl StaticWeather {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
        }
    }

    pub fn failing() -> Self {
        Self { summary: None }
    }
}

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn current(&self, city: &str) -> Result<String, ToolError> {
        match &self.summary {
            Some(summary) => Ok(summary.clone()),
            None => Err(ToolError::ExecutionFailed(format!(
                "no weather for {city}"
            ))),
        }
    }
}

/// Search provider double that always returns the same hits.
#[derive(Clone, Default)]
pub struct StaticSearch {
    hits: Vec<SearchHit>,
    fail: bool,
}

impl StaticSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            hits: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl SearchProvider for StaticSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ToolError> {
        if self.fail {
            return Err(ToolError::ExecutionFailed(format!(
                "search unavailable for {query}"
            )));
        }
        Ok(self.hits.clone())
    }
}
