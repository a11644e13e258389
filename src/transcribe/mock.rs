//! Scripted speech-to-text capability for tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::transcriber::Transcriber;

/// Test double that replays a fixed transcript and records every call.
#[derive(Debug, Default)]
pub struct MockTranscriber {
    transcript: Option<String>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockTranscriber {
    /// Always answer with the given transcript.
    pub fn returning(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Never produce a transcript.
    pub fn absent() -> Self {
        Self {
            transcript: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of calls seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Audio paths passed in, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transcriber for MockTranscriber {
    fn name(&self) -> &str {
        "mock"
    }

    fn transcribe(&self, audio: &Path) -> Option<String> {
        self.calls.lock().unwrap().push(audio.to_path_buf());
        self.transcript.clone()
    }
}
