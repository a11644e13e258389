//! Speech-to-text capability interface

use std::path::Path;

/// A speech-to-text capability.
///
/// Implementations either produce a transcript for the referenced audio or
/// report it as unavailable with `None`; they never panic on bad input.
pub trait Transcriber: Send + Sync {
    /// Short implementation name for logs.
    fn name(&self) -> &str;

    /// Transcribe the referenced audio file.
    fn transcribe(&self, audio: &Path) -> Option<String>;
}
