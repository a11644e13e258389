//! CLI Module
//!
//! Command-line interface for the PulseUX stimulation tracker.

pub mod commands;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::analysis::OllamaConfig;
use crate::tracker::{InputMode, ScoringPolicy, TrackerOptions};

/// PulseUX - Measure user stimulation via voice/text analysis
#[derive(Parser, Debug)]
#[command(name = "pulseux")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input mode: 'text' for typing, 'voice' for an audio file
    #[arg(long, value_enum, default_value_t = ModeArg::Text)]
    pub mode: ModeArg,

    /// Direct input string or path to an audio file
    #[arg(long)]
    pub input: Option<String>,

    /// Scoring policy to use
    #[arg(long, value_enum, default_value_t = AnalyzerArg::Heuristic)]
    pub analyzer: AnalyzerArg,

    /// Ollama endpoint override
    #[arg(long)]
    pub ollama_host: Option<String>,

    /// Ollama model override
    #[arg(long)]
    pub ollama_model: Option<String>,

    /// Whisper GGML model path override
    #[arg(long)]
    pub whisper_model: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum ModeArg {
    Text,
    Voice,
}

impl From<ModeArg> for InputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Text => InputMode::Text,
            ModeArg::Voice => InputMode::Voice,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum AnalyzerArg {
    Heuristic,
    Ollama,
}

impl From<AnalyzerArg> for ScoringPolicy {
    fn from(arg: AnalyzerArg) -> Self {
        match arg {
            AnalyzerArg::Heuristic => ScoringPolicy::Heuristic,
            AnalyzerArg::Ollama => ScoringPolicy::Ollama,
        }
    }
}

impl Cli {
    /// Single-shot payload; an empty string behaves like no input at all.
    pub fn single_input(&self) -> Option<&str> {
        self.input.as_deref().filter(|s| !s.is_empty())
    }

    /// Tracker construction options from flags and environment.
    pub fn tracker_options(&self) -> TrackerOptions {
        let ollama = if self.ollama_host.is_some() || self.ollama_model.is_some() {
            let mut config = OllamaConfig::default();
            if let Some(host) = &self.ollama_host {
                config.host = host.clone();
            }
            if let Some(model) = &self.ollama_model {
                config.model = model.clone();
            }
            Some(config)
        } else {
            None
        };

        TrackerOptions {
            policy: self.analyzer.into(),
            ollama,
            whisper_model: self.whisper_model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_mode_is_the_default() {
        let cli = Cli::parse_from(["pulseux"]);
        assert_eq!(cli.mode, ModeArg::Text);
        assert_eq!(cli.analyzer, AnalyzerArg::Heuristic);
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_voice_mode_with_input() {
        let cli = Cli::parse_from(["pulseux", "--mode", "voice", "--input", "clip.wav"]);
        assert_eq!(cli.mode, ModeArg::Voice);
        assert_eq!(cli.single_input(), Some("clip.wav"));
    }

    #[test]
    fn test_empty_input_counts_as_interactive() {
        let cli = Cli::parse_from(["pulseux", "--input", ""]);
        assert_eq!(cli.single_input(), None);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["pulseux", "--mode", "gesture"]).is_err());
    }

    #[test]
    fn test_ollama_overrides_build_config() {
        let cli = Cli::parse_from([
            "pulseux",
            "--analyzer",
            "ollama",
            "--ollama-host",
            "http://remote:11434",
            "--ollama-model",
            "llama3",
        ]);
        let options = cli.tracker_options();
        assert_eq!(options.policy, ScoringPolicy::Ollama);

        let config = options.ollama.expect("overrides present");
        assert_eq!(config.host, "http://remote:11434");
        assert_eq!(config.model, "llama3");
    }

    #[test]
    fn test_no_overrides_means_environment_defaults() {
        let cli = Cli::parse_from(["pulseux", "--analyzer", "ollama"]);
        assert!(cli.tracker_options().ollama.is_none());
    }
}
