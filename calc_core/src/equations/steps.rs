//! # Derivation Steps
//!
//! Ordered record of how a solution was reached. Each stage appends one
//! [`SolutionStep`]; steps are never reordered or edited once recorded, and
//! display layers render them in sequence.
//!
//! ```rust
//! use calc_core::equations::steps::StepRecorder;
//!
//! let mut steps = StepRecorder::new();
//! steps.record("Normalized form", "2x - 10 = 0", "Move every term to the left side");
//! steps.record("Solution", "x = 5", "Divide both sides by 2");
//!
//! let steps = steps.into_steps();
//! assert_eq!(steps[0].title, "Normalized form");
//! assert_eq!(steps.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// One stage of a derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    /// Short heading (e.g., "Calculate discriminant")
    pub title: String,
    /// The math shown for this stage (e.g., "D = (5)² - 4(1)(6) = 1")
    pub math: String,
    /// Plain-language explanation of the stage
    pub explanation: String,
}

impl SolutionStep {
    pub fn new(title: impl Into<String>, math: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            math: math.into(),
            explanation: explanation.into(),
        }
    }
}

/// Append-only collector for derivation steps.
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    steps: Vec<SolutionStep>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next stage of the derivation
    pub fn record(&mut self, title: impl Into<String>, math: impl Into<String>, explanation: impl Into<String>) {
        self.steps.push(SolutionStep::new(title, math, explanation));
    }

    /// Get all recorded steps in creation order
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish recording and hand the ordered steps to the result
    pub fn into_steps(self) -> Vec<SolutionStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_keep_creation_order() {
        let mut recorder = StepRecorder::new();
        assert!(recorder.is_empty());

        recorder.record("First", "a", "one");
        recorder.record("Second", "b", "two");
        recorder.record("Third", "c", "three");

        let titles: Vec<&str> = recorder.steps().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
        assert_eq!(recorder.len(), 3);
    }

    #[test]
    fn test_step_serialization() {
        let step = SolutionStep::new("Solution", "x = 5", "Divide both sides by 2");
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"math\":\"x = 5\""));
        let roundtrip: SolutionStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, roundtrip);
    }
}
