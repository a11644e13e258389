//! Stimulation scoring capabilities
//!
//! This module provides:
//! - `Analyzer` trait for all scoring policies
//! - `StimulationScore` range-checked score type
//! - Keyword heuristic and Ollama-backed implementations
//! - Mock implementation for testing

mod analyzer;
mod heuristic;
mod mock;
mod ollama;

pub use analyzer::{Analyzer, StimulationScore};
pub use heuristic::HeuristicAnalyzer;
pub use mock::MockAnalyzer;
pub use ollama::{OllamaAnalyzer, OllamaConfig};
