//! Deterministic scoring policy
//!
//! No external dependency: a fixed base score plus a fixed increment per
//! detected arousal signal, clamped into range. Identical input always
//! yields an identical score.

use super::analyzer::{Analyzer, StimulationScore};

/// Baseline for any non-empty utterance.
const BASE_SCORE: f32 = 0.2;
/// Added once when the text carries an emphatic mark.
const EXCLAMATION_BOOST: f32 = 0.3;
/// Added once when the text runs past [`LENGTH_THRESHOLD`] characters.
const LENGTH_BOOST: f32 = 0.2;
/// Added once when any high-arousal keyword appears.
const KEYWORD_BOOST: f32 = 0.3;

/// Texts longer than this pick up the length boost.
const LENGTH_THRESHOLD: usize = 20;

/// High-arousal keywords, matched case-insensitively as substrings.
const AROUSAL_KEYWORDS: &[&str] = &[
    "wow",
    "amazing",
    "incredible",
    "exciting",
    "excited",
    "awesome",
    "unbelievable",
    "thrilling",
];

/// Keyword/punctuation scoring policy. Stateless and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for HeuristicAnalyzer {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn analyze(&self, text: &str) -> Option<StimulationScore> {
        let lower = text.to_lowercase();
        let mut score = BASE_SCORE;

        if text.contains('!') {
            score += EXCLAMATION_BOOST;
        }
        if text.chars().count() > LENGTH_THRESHOLD {
            score += LENGTH_BOOST;
        }
        if AROUSAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            score += KEYWORD_BOOST;
        }

        Some(StimulationScore::clamped(score))
    }
}
