//! Terminal gauge rendering for stimulation scores

use colored::{ColoredString, Colorize};

use crate::analysis::StimulationScore;

/// Number of cells in the gauge bar.
pub const BAR_WIDTH: usize = 20;

/// Upper bound of the low band.
const LOW_MAX: f32 = 0.4;
/// Upper bound of the medium band.
const MEDIUM_MAX: f32 = 0.7;

/// Intensity band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    /// Band for a score: low up to 0.4, medium up to 0.7, high above.
    pub fn of(score: StimulationScore) -> Self {
        let value = score.value();
        if value > MEDIUM_MAX {
            Tier::High
        } else if value > LOW_MAX {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

/// Number of filled cells for a score; partial cells round down.
fn fill_cells(score: StimulationScore) -> usize {
    (BAR_WIDTH as f32 * score.value()) as usize
}

/// The bare gauge bar, e.g. `██████--------------`.
fn bar(score: StimulationScore) -> String {
    let filled = fill_cells(score);
    let mut cells = "█".repeat(filled);
    cells.push_str(&"-".repeat(BAR_WIDTH - filled));
    cells
}

/// Gauge body without the leading label, uncolored.
fn body(score: StimulationScore) -> String {
    format!("[{}] {:.1}%", bar(score), score.value() * 100.0)
}

fn colorize(text: String, tier: Tier) -> ColoredString {
    match tier {
        Tier::Low => text.bright_green(),
        Tier::Medium => text.bright_yellow(),
        Tier::High => text.bright_red(),
    }
}

/// Render the full gauge line for a score.
pub fn render(score: StimulationScore) -> String {
    format!("Stimulation: {}", colorize(body(score), Tier::of(score)))
}
