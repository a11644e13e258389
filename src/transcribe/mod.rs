//! Speech-to-text capabilities
//!
//! This module provides:
//! - `Transcriber` trait for all speech-to-text backends
//! - Whisper.cpp implementation behind the `whisper` feature
//! - Mock implementation for testing

mod mock;
mod transcriber;
mod whisper;

pub use mock::MockTranscriber;
pub use transcriber::Transcriber;
pub use whisper::WhisperTranscriber;
