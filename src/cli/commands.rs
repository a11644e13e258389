//! CLI Command Implementations
//!
//! Run-loop logic for single-shot and interactive sessions.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::display;
use crate::tracker::{InputMode, InputRecord, Tracker};

/// Interactive prompt.
const PROMPT: &str = "PulseUX> ";

/// Score one payload and draw the gauge.
pub fn run_once(tracker: &Tracker, mode: InputMode, payload: &str) {
    info!("single-shot {} input", mode);

    let record = InputRecord {
        mode,
        payload: payload.to_string(),
    };
    let score = tracker.process_input(&record);
    println!("{}", display::render(score));
}

/// Drive the read-score-render loop until a quit word or end of input.
///
/// Typed lines are always treated as text. Blank lines re-prompt without
/// scoring.
pub fn run_interactive(tracker: &Tracker, input: impl BufRead) {
    println!("Type 'exit' to quit. Enter text to analyze stimulation:");

    let mut lines = input.lines();
    loop {
        print!("{}", PROMPT);
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                warn!("cannot read input: {}", e);
                break;
            }
            None => break,
        };

        if is_quit(&line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let score = tracker.process_input(&InputRecord::text(line));
        println!("{}", display::render(score));
    }
}

/// Quit words match case-insensitively against the whole line.
fn is_quit(line: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered == "exit" || lowered == "quit"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    use crate::analysis::MockAnalyzer;
    use crate::transcribe::MockTranscriber;

    fn tracker(analyzer: &Arc<MockAnalyzer>) -> Tracker {
        Tracker::with_capabilities(analyzer.clone(), Arc::new(MockTranscriber::absent()))
    }

    #[test]
    fn test_quit_words_end_the_loop_before_scoring() {
        let analyzer = Arc::new(MockAnalyzer::returning(0.5));
        let input = Cursor::new("EXIT\nnever scored\n");

        run_interactive(&tracker(&analyzer), input);

        assert_eq!(analyzer.call_count(), 0);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let analyzer = Arc::new(MockAnalyzer::returning(0.5));
        let input = Cursor::new("\n   \nhello\nquit\n");

        run_interactive(&tracker(&analyzer), input);

        assert_eq!(analyzer.calls(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_end_of_input_ends_the_loop() {
        let analyzer = Arc::new(MockAnalyzer::returning(0.5));
        let input = Cursor::new("one\ntwo\n");

        run_interactive(&tracker(&analyzer), input);

        assert_eq!(analyzer.call_count(), 2);
    }

    #[test]
    fn test_is_quit_matches_exact_words_only() {
        assert!(is_quit("exit"));
        assert!(is_quit("Quit"));
        assert!(is_quit("QUIT"));
        assert!(!is_quit("exit now"));
        assert!(!is_quit(" exit"));
    }
}
