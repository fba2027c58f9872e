//! Full session lifecycle integration tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use vesper_core::{
    AgentDefinition, CoreError, SessionController, SessionEngine, SessionInputOptions,
    SessionState,
};
use serde_json::json;
use vesper_memory::{MemoryGateway, MemoryRecord};
use vesper_protocol::{Role, TranscriptEntry};
use vesper_test_utils::{RecordingMemoryService, StaticSearch, StaticWeather};
use vesper_tools::{SearchHit, ToolContext, ToolServices, builtin_tool_registry};

/// Engine double that captures the seeded definition and replays a
/// scripted transcript at shutdown.
#[derive(Default)]
struct ReplayEngine {
    seeded: Mutex<Option<AgentDefinition>>,
    transcript: Vec<TranscriptEntry>,
}

impl ReplayEngine {
    fn with_transcript(transcript: Vec<TranscriptEntry>) -> Self {
        Self {
            seeded: Mutex::new(None),
            transcript,
        }
    }
}

#[async_trait]
impl SessionEngine for ReplayEngine {
    async fn start(
        &self,
        definition: &AgentDefinition,
        _input: SessionInputOptions,
    ) -> Result<(), CoreError> {
        *self.seeded.lock() = Some(definition.clone());
        Ok(())
    }

    async fn connect(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn generate_reply(&self, _instructions: &str) -> Result<(), CoreError> {
        Ok(())
    }

    fn history(&self) -> Vec<TranscriptEntry> {
        self.transcript.clone()
    }
}

/// A full run: prior memories seed the context at start, and the
/// finished transcript is filtered and stored at shutdown.
#[tokio::test]
async fn seeds_from_memories_and_consolidates_transcript() {
    let service = Arc::new(RecordingMemoryService::with_records(vec![MemoryRecord {
        memory: "David got the job".to_string(),
        updated_at: "2025-08-24T05:26:05Z".to_string(),
    }]));
    let gateway = MemoryGateway::new(service.clone());

    let engine = Arc::new(ReplayEngine::with_transcript(vec![
        TranscriptEntry::new(Role::User, "hi"),
        TranscriptEntry::new(Role::System, "noop"),
        TranscriptEntry::new(Role::Assistant, "hello"),
    ]));
    let controller = SessionController::new(
        engine.clone(),
        Some(gateway),
        builtin_tool_registry(),
        "David",
    );

    controller.start().await.expect("start");
    assert_eq!(controller.state(), SessionState::Active);

    let definition = engine.seeded.lock().clone().expect("definition");
    assert_eq!(definition.seeded_context.messages.len(), 1);
    let seed = &definition.seeded_context.messages[0];
    assert_eq!(seed.role, Role::Assistant);
    assert!(seed.content.contains("David"));
    assert!(seed.content.contains("got the job"));

    controller.shutdown().await;
    assert_eq!(controller.state(), SessionState::Terminated);

    let added = service.added();
    assert_eq!(added.len(), 1);
    let (turns, owner) = &added[0];
    assert_eq!(owner, "David");
    assert_eq!(
        turns
            .iter()
            .map(|turn| (turn.role, turn.content.as_str()))
            .collect::<Vec<_>>(),
        vec![(Role::User, "hi"), (Role::Assistant, "hello")]
    );
}

/// A degraded run: no memory store at all still starts, seeds nothing,
/// and shuts down cleanly without touching a store.
#[tokio::test]
async fn runs_without_memory_store() {
    let engine = Arc::new(ReplayEngine::with_transcript(vec![TranscriptEntry::new(
        Role::User,
        "hi",
    )]));
    let controller =
        SessionController::new(engine.clone(), None, builtin_tool_registry(), "David");

    controller.start().await.expect("start");
    let definition = engine.seeded.lock().clone().expect("definition");
    assert!(definition.seeded_context.messages.is_empty());

    controller.shutdown().await;
    assert_eq!(controller.state(), SessionState::Terminated);
}

/// Tool dispatch during an active session: the registry handed to the
/// engine answers weather and search calls through the shared services.
#[tokio::test]
async fn active_session_tools_answer_through_shared_services() {
    let gateway = MemoryGateway::new(Arc::new(RecordingMemoryService::new()));
    let services = Arc::new(ToolServices {
        memory: Some(gateway.clone()),
        weather: Some(Arc::new(StaticWeather::new("London: +20\u{b0}C"))),
        search: Some(Arc::new(StaticSearch::new(vec![SearchHit {
            text: "rust lang".to_string(),
            url: "https://rust-lang.org".to_string(),
        }]))),
    });
    let ctx = ToolContext::new("David", services);

    let engine = Arc::new(ReplayEngine::default());
    let registry = builtin_tool_registry();
    let controller =
        SessionController::new(engine, Some(gateway), registry.clone(), "David");
    controller.start().await.expect("start");
    assert_eq!(controller.state(), SessionState::Active);

    let weather = registry
        .dispatch(&ctx, "get_weather", json!({ "city": "London" }))
        .await;
    assert_eq!(weather, "London: +20\u{b0}C".to_string());

    let search = registry
        .dispatch(&ctx, "web_search", json!({ "query": "rust" }))
        .await;
    assert_eq!(search, "rust lang (https://rust-lang.org)".to_string());

    controller.shutdown().await;
}
