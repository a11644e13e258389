//! Tracker Integration Tests
//!
//! End-to-end checks for the input-to-score pipeline driven by scripted
//! capabilities.

use std::path::PathBuf;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use pulseux::analysis::MockAnalyzer;
use pulseux::transcribe::MockTranscriber;
use pulseux::{InputRecord, StimulationScore, Tracker};

/// Helper to wire a tracker from scripted capabilities.
fn tracker(analyzer: &Arc<MockAnalyzer>, transcriber: &Arc<MockTranscriber>) -> Tracker {
    Tracker::with_capabilities(analyzer.clone(), transcriber.clone())
}

// === Voice Pipeline Tests ===

#[test]
fn test_voice_round_trip() {
    let analyzer = Arc::new(MockAnalyzer::returning(0.85));
    let transcriber = Arc::new(MockTranscriber::returning("Transcribed text"));
    let tracker = tracker(&analyzer, &transcriber);

    let score = tracker.process_input(&InputRecord::voice("session.wav"));

    assert_eq!(score, StimulationScore::clamped(0.85));
    assert_eq!(transcriber.calls(), vec![PathBuf::from("session.wav")]);
    assert_eq!(analyzer.calls(), vec!["Transcribed text".to_string()]);
}

#[test]
fn test_failed_transcription_scores_zero_without_analysis() {
    let analyzer = Arc::new(MockAnalyzer::returning(0.85));
    let transcriber = Arc::new(MockTranscriber::absent());
    let tracker = tracker(&analyzer, &transcriber);

    let score = tracker.process_input(&InputRecord::voice("session.wav"));

    assert_eq!(score.value(), 0.0, "failed transcription must report zero");
    assert_eq!(analyzer.call_count(), 0, "nothing to analyze after a failure");
}

// === Degraded Scoring Tests ===

#[test]
fn test_unavailable_scoring_reports_zero() {
    let analyzer = Arc::new(MockAnalyzer::absent());
    let transcriber = Arc::new(MockTranscriber::absent());
    let tracker = tracker(&analyzer, &transcriber);

    let score = tracker.process_input(&InputRecord::text("anything at all"));

    assert_eq!(score.value(), 0.0);
    assert_eq!(analyzer.call_count(), 1, "scoring must still be attempted");
}

// === Always-In-Range Tests ===

#[test]
fn test_scores_never_leave_the_unit_range() {
    let transcriber = Arc::new(MockTranscriber::absent());

    let overdriven = Arc::new(MockAnalyzer::returning(5.0));
    let score = tracker(&overdriven, &transcriber).process_input(&InputRecord::text("loud"));
    assert_eq!(score.value(), 1.0, "scores above the range clamp to 1.0");

    let negative = Arc::new(MockAnalyzer::returning(-2.0));
    let score = tracker(&negative, &transcriber).process_input(&InputRecord::text("quiet"));
    assert_eq!(score.value(), 0.0, "scores below the range clamp to 0.0");
}

// === Blank Input Tests ===

#[test]
fn test_blank_input_is_never_scored() {
    let analyzer = Arc::new(MockAnalyzer::returning(0.9));
    let transcriber = Arc::new(MockTranscriber::absent());
    let tracker = tracker(&analyzer, &transcriber);

    for payload in ["", " ", "\t", "   \t  "] {
        let score = tracker.process_input(&InputRecord::text(payload));
        assert_eq!(score.value(), 0.0, "blank payload {:?} must score zero", payload);
    }

    assert_eq!(analyzer.call_count(), 0);
}
