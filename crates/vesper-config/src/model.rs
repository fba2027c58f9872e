//! Configuration model and environment loader.

use crate::error::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};

/// Default owner identity when `USER_NAME` is unset.
const DEFAULT_OWNER: &str = "David";
/// Realtime model served by the LLM backend.
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
/// Voice preset for speech output.
const DEFAULT_VOICE: &str = "Puck";
/// Sampling temperature for the realtime model.
const DEFAULT_TEMPERATURE: f32 = 0.8;
/// Output token cap per reply.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Realtime LLM backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmConfig {
    /// API key for the LLM backend.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Voice preset.
    pub voice: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output tokens per reply.
    pub max_output_tokens: u32,
}

/// Memory store credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// API key for the memory store.
    pub api_key: String,
}

/// Transport/room layer credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransportConfig {
    /// Transport API key.
    pub api_key: String,
    /// Transport API secret.
    pub api_secret: String,
    /// Optional transport endpoint override.
    pub url: Option<String>,
}

/// Full configuration surface for a Vesper process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VesperConfig {
    /// LLM backend settings.
    pub llm: LlmConfig,
    /// Memory store credentials.
    pub memory: MemoryConfig,
    /// Transport credentials.
    pub transport: TransportConfig,
    /// Default owner identity for memory scoping.
    pub owner: String,
}

impl VesperConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Missing or empty credentials are fatal; the owner falls back to a
    /// default identity instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            llm: LlmConfig {
                api_key: require(&lookup, "GOOGLE_API_KEY")?,
                model: DEFAULT_MODEL.to_string(),
                voice: DEFAULT_VOICE.to_string(),
                temperature: DEFAULT_TEMPERATURE,
                max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            },
            memory: MemoryConfig {
                api_key: require(&lookup, "MEM0_API_KEY")?,
            },
            transport: TransportConfig {
                api_key: require(&lookup, "LIVEKIT_API_KEY")?,
                api_secret: require(&lookup, "LIVEKIT_API_SECRET")?,
                url: lookup("LIVEKIT_URL").filter(|value| !value.trim().is_empty()),
            },
            owner: lookup("USER_NAME")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
        };
        info!("configuration loaded (owner={})", config.owner);
        Ok(config)
    }
}

/// Fetch a required variable, rejecting empty values.
fn require<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar(key))
}
