//! Input-to-score orchestration
//!
//! The tracker owns the scoring and transcription capabilities and turns
//! each input record into a stimulation score. Capability construction can
//! fail; `process_input` cannot. Any per-call failure degrades to the zero
//! score instead of erroring.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::analysis::{
    Analyzer, HeuristicAnalyzer, OllamaAnalyzer, OllamaConfig, StimulationScore,
};
use crate::error::Result;
use crate::transcribe::{Transcriber, WhisperTranscriber};

/// How an input payload should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Payload is the utterance itself.
    Text,
    /// Payload references an audio file to transcribe first.
    Voice,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::Voice => "voice",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One captured input: a typed utterance or a reference to recorded audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub mode: InputMode,
    pub payload: String,
}

impl InputRecord {
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            mode: InputMode::Text,
            payload: payload.into(),
        }
    }

    pub fn voice(payload: impl Into<String>) -> Self {
        Self {
            mode: InputMode::Voice,
            payload: payload.into(),
        }
    }
}

/// Which scoring policy the tracker should construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    /// Offline keyword heuristic.
    #[default]
    Heuristic,
    /// Ollama-backed model scoring.
    Ollama,
}

/// Construction-time settings for the tracker.
///
/// `None` fields fall back to environment-configured defaults.
#[derive(Debug, Clone, Default)]
pub struct TrackerOptions {
    pub policy: ScoringPolicy,
    pub ollama: Option<OllamaConfig>,
    pub whisper_model: Option<PathBuf>,
}

/// Orchestrates transcription and scoring for each input.
pub struct Tracker {
    analyzer: Arc<dyn Analyzer>,
    transcriber: Arc<dyn Transcriber>,
}

impl Tracker {
    /// Build the capabilities selected by the options.
    ///
    /// Fails when a backend cannot be reached or a model cannot be loaded;
    /// nothing about later inputs can fail construction.
    pub fn new(options: &TrackerOptions) -> Result<Self> {
        let analyzer: Arc<dyn Analyzer> = match options.policy {
            ScoringPolicy::Heuristic => Arc::new(HeuristicAnalyzer::new()),
            ScoringPolicy::Ollama => match &options.ollama {
                Some(config) => Arc::new(OllamaAnalyzer::with_config(config.clone())?),
                None => Arc::new(OllamaAnalyzer::new()?),
            },
        };

        let transcriber: Arc<dyn Transcriber> = match &options.whisper_model {
            Some(path) => Arc::new(WhisperTranscriber::with_model(path)?),
            None => Arc::new(WhisperTranscriber::new()?),
        };

        info!("tracker ready, scoring with '{}'", analyzer.name());
        Ok(Self {
            analyzer,
            transcriber,
        })
    }

    /// Assemble a tracker from pre-built capabilities.
    pub fn with_capabilities(
        analyzer: Arc<dyn Analyzer>,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            analyzer,
            transcriber,
        }
    }

    /// Turn one input record into a stimulation score.
    ///
    /// Total over all inputs: a failed transcription or an unavailable score
    /// reports `StimulationScore::ZERO`, never an error.
    pub fn process_input(&self, record: &InputRecord) -> StimulationScore {
        let text = match record.mode {
            InputMode::Text => record.payload.clone(),
            InputMode::Voice => {
                match self.transcriber.transcribe(Path::new(&record.payload)) {
                    Some(text) => {
                        println!("[Transcribed]: {}", text);
                        text
                    }
                    None => {
                        println!("Transcription failed.");
                        return StimulationScore::ZERO;
                    }
                }
            }
        };

        if text.trim().is_empty() {
            debug!("blank input, nothing to score");
            return StimulationScore::ZERO;
        }

        match self.analyzer.analyze(&text) {
            Some(score) => score,
            None => {
                warn!("scoring unavailable, reporting zero");
                StimulationScore::ZERO
            }
        }
    }
}
