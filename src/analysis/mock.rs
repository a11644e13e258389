//! Scripted scoring capability for tests

use std::sync::Mutex;

use super::analyzer::{Analyzer, StimulationScore};

/// Test double that replays a fixed response and records every call.
#[derive(Debug, Default)]
pub struct MockAnalyzer {
    response: Option<StimulationScore>,
    calls: Mutex<Vec<String>>,
}

impl MockAnalyzer {
    /// Always answer with the given raw score.
    pub fn returning(raw: f32) -> Self {
        Self {
            response: Some(StimulationScore::clamped(raw)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Never produce a score.
    pub fn absent() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of calls seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Texts passed in, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Analyzer for MockAnalyzer {
    fn name(&self) -> &str {
        "mock"
    }

    fn analyze(&self, text: &str) -> Option<StimulationScore> {
        self.calls.lock().unwrap().push(text.to_string());
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_scripted_score() {
        let mock = MockAnalyzer::returning(0.6);
        assert_eq!(mock.analyze("anything"), Some(StimulationScore::clamped(0.6)));
    }

    #[test]
    fn test_absent_never_scores() {
        let mock = MockAnalyzer::absent();
        assert_eq!(mock.analyze("anything"), None);
    }

    #[test]
    fn test_records_calls_in_order() {
        let mock = MockAnalyzer::returning(0.5);
        mock.analyze("first");
        mock.analyze("second");
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.calls(), vec!["first".to_string(), "second".to_string()]);
    }
}
