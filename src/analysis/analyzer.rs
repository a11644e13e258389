//! Scoring capability contract
//!
//! Defines the `Analyzer` trait every scoring policy implements, and the
//! clamped score type all policies produce.

use serde::Serialize;

/// A stimulation score, always inside [0.0, 1.0].
///
/// The only constructor is [`StimulationScore::clamped`], so an
/// out-of-range or NaN value from a backend can never cross a capability
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct StimulationScore(f32);

impl StimulationScore {
    /// The zero score, the fail-safe default for every degraded path.
    pub const ZERO: StimulationScore = StimulationScore(0.0);

    /// Build a score, clamping into [0.0, 1.0]. NaN clamps to 0.0.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The raw value, guaranteed inside [0.0, 1.0].
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for StimulationScore {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Scoring capability: text in, bounded score or absent out.
///
/// Implementations must never panic and never return an error; any
/// per-call backend failure is reported as `None`.
pub trait Analyzer: Send + Sync {
    /// Short policy name for log lines.
    fn name(&self) -> &str;

    /// Score a non-empty utterance, or report the absent result.
    fn analyze(&self, text: &str) -> Option<StimulationScore>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_passthrough_in_range() {
        assert_eq!(StimulationScore::clamped(0.5).value(), 0.5);
        assert_eq!(StimulationScore::clamped(0.0).value(), 0.0);
        assert_eq!(StimulationScore::clamped(1.0).value(), 1.0);
    }

    #[test]
    fn test_clamp_above_range() {
        assert_eq!(StimulationScore::clamped(1.7).value(), 1.0);
    }

    #[test]
    fn test_clamp_below_range() {
        assert_eq!(StimulationScore::clamped(-0.3).value(), 0.0);
    }

    #[test]
    fn test_clamp_nan() {
        assert_eq!(StimulationScore::clamped(f32::NAN).value(), 0.0);
    }

    #[test]
    fn test_zero_is_default() {
        assert_eq!(StimulationScore::default(), StimulationScore::ZERO);
        assert_eq!(StimulationScore::ZERO.value(), 0.0);
    }
}
