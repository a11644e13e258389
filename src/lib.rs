//! PulseUX - Terminal Stimulation Tracker
//!
//! PulseUX measures how stimulating a piece of user input is:
//! 1. Text input - typed utterances scored directly
//! 2. Voice input - audio files transcribed first, then scored
//!
//! # Architecture
//!
//! Each input flows through three stages:
//! - Transcription: optional speech-to-text for voice payloads
//! - Scoring: a pluggable analyzer maps text to a 0.0-1.0 score
//! - Display: a colored terminal gauge with low/medium/high bands

pub mod analysis;
pub mod cli;
pub mod display;
pub mod error;
pub mod tracker;
pub mod transcribe;

pub use analysis::{Analyzer, StimulationScore};
pub use error::{PulseError, Result};
pub use tracker::{InputMode, InputRecord, ScoringPolicy, Tracker, TrackerOptions};
pub use transcribe::Transcriber;
