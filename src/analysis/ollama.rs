//! Model-backed scoring policy over a local Ollama instance
//!
//! Construction ensures the configured model is present (pulling it when
//! missing); each call afterwards is exactly one blocking chat round-trip
//! with no retries. Transport, shape, and parse failures during a call are
//! all flattened to the absent result at the trait boundary.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::analyzer::{Analyzer, StimulationScore};
use crate::error::{PulseError, Result};

/// Default Ollama endpoint.
const DEFAULT_HOST: &str = "http://localhost:11434";
/// Default scoring model.
const DEFAULT_MODEL: &str = "phi3";
/// Default per-request timeout for chat and tag listing.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Low temperature keeps the bare-float replies stable.
const SCORING_TEMPERATURE: f32 = 0.1;

/// Connection settings for the Ollama backend.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub host: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        let host = env::var("PULSEUX_OLLAMA_URL").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let model = env::var("PULSEUX_OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout_ms = env::var("PULSEUX_OLLAMA_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            host,
            model,
            timeout_ms,
        }
    }
}

/// Chat request sent to `/api/chat`
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    stream: bool,
    messages: Vec<ChatMessage>,
    options: ChatOptions,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
}

/// Chat response from `/api/chat`
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Model listing from `/api/tags`
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

/// Pull request sent to `/api/pull`
#[derive(Debug, Serialize)]
struct PullRequest {
    name: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    #[serde(default)]
    status: String,
}

/// Scoring policy that delegates to an Ollama chat model.
pub struct OllamaAnalyzer {
    config: OllamaConfig,
    client: reqwest::blocking::Client,
}

impl OllamaAnalyzer {
    /// Connect using environment defaults and ensure the model is present.
    pub fn new() -> Result<Self> {
        Self::with_config(OllamaConfig::default())
    }

    /// Connect with explicit settings and ensure the model is present.
    pub fn with_config(config: OllamaConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build().map_err(|e| {
            PulseError::BackendUnavailable {
                host: config.host.clone(),
                reason: e.to_string(),
            }
        })?;

        let analyzer = Self { config, client };
        analyzer.ensure_model()?;
        Ok(analyzer)
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    /// Check the configured model is installed locally, pulling it if not.
    fn ensure_model(&self) -> Result<()> {
        let url = format!("{}/api/tags", self.config.host);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout())
            .send()
            .map_err(|e| PulseError::BackendUnavailable {
                host: self.config.host.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(PulseError::BackendUnavailable {
                host: self.config.host.clone(),
                reason: format!("tag listing returned {}", response.status()),
            });
        }

        let tags: TagsResponse = response.json().map_err(|e| PulseError::ModelPreparation {
            model: self.config.model.clone(),
            reason: format!("invalid tag listing: {}", e),
        })?;

        // Installed models are reported with their tag ("phi3:latest")
        let installed = tags
            .models
            .iter()
            .any(|m| m.name == self.config.model || untagged(&m.name) == self.config.model);

        if installed {
            return Ok(());
        }

        info!(
            "model '{}' not found locally, pulling it now",
            self.config.model
        );
        self.pull_model()?;
        info!("model '{}' pulled successfully", self.config.model);
        Ok(())
    }

    /// Blocking model pull; deliberately unbounded since downloads are long.
    fn pull_model(&self) -> Result<()> {
        let url = format!("{}/api/pull", self.config.host);
        let request = PullRequest {
            name: self.config.model.clone(),
            stream: false,
        };

        let preparation_error = |reason: String| PulseError::ModelPreparation {
            model: self.config.model.clone(),
            reason,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| preparation_error(format!("pull request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(preparation_error(format!(
                "pull returned {}",
                response.status()
            )));
        }

        let pull: PullResponse = response
            .json()
            .map_err(|e| preparation_error(format!("invalid pull response: {}", e)))?;

        if pull.status != "success" {
            return Err(preparation_error(format!(
                "pull ended with status '{}'",
                pull.status
            )));
        }

        Ok(())
    }

    /// One chat round-trip; no retries.
    fn request_score(&self, text: &str) -> anyhow::Result<f32> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            stream: false,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: scoring_prompt(text),
            }],
            options: ChatOptions {
                temperature: SCORING_TEMPERATURE,
            },
        };

        let url = format!("{}/api/chat", self.config.host);
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout())
            .json(&request)
            .send()
            .context("chat request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("backend returned {}", response.status()));
        }

        let reply: ChatResponse = response.json().context("invalid chat response")?;
        parse_score_reply(&reply.message.content)
            .ok_or_else(|| anyhow!("unparseable score reply {:?}", reply.message.content))
    }
}

impl Analyzer for OllamaAnalyzer {
    fn name(&self) -> &str {
        "ollama"
    }

    fn analyze(&self, text: &str) -> Option<StimulationScore> {
        match self.request_score(text) {
            Ok(raw) => Some(StimulationScore::clamped(raw)),
            Err(e) => {
                warn!("ollama scoring failed: {:#}", e);
                None
            }
        }
    }
}

/// Build the instruction prompt with the utterance embedded.
fn scoring_prompt(text: &str) -> String {
    format!(
        "Analyze the following text for its emotional intensity and stimulation level. \
         Reply with a single float between 0.0 (calm, neutral) and 1.0 (highly excited \
         or agitated). Do not include any other text or explanation, just the float.\n\n\
         Text: \"{}\"",
        text
    )
}

/// Parse the backend's bare-float reply. Whitespace is tolerated, prose is not.
fn parse_score_reply(content: &str) -> Option<f32> {
    content
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Strip the tag from an installed model name ("phi3:latest" -> "phi3").
fn untagged(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}
