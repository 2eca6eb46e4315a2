//! # Solution Records
//!
//! Outcome of a solve: the kind of answer reached plus the derivation that
//! produced it. Degenerate outcomes ("no solutions", "no real roots") are
//! ordinary variants, not errors.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "equation_type": "quadratic",
//!   "normalized_form": "x² + 5x + 6 = 0",
//!   "steps": [
//!     { "title": "Normalized form", "math": "x² + 5x + 6 = 0", "explanation": "..." }
//!   ],
//!   "solution": { "kind": "two_roots", "value": [-3.0, -2.0] },
//!   "discriminant": 1.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::normalize::EquationType;
use super::steps::SolutionStep;

/// What kind of answer an equation has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Solution {
    /// Linear equation with exactly one solution
    OneSolution(f64),
    /// Linear equation that is false for every x (e.g. `4 = 0`)
    NoSolution,
    /// Linear equation that is true for every x (e.g. `0 = 0`)
    InfiniteSolutions,
    /// Quadratic with positive discriminant, roots in ascending order
    TwoRoots([f64; 2]),
    /// Quadratic with zero discriminant
    OneRoot(f64),
    /// Quadratic with negative discriminant
    NoRealRoots,
}

impl Solution {
    /// Human-readable description of the outcome
    pub fn label(&self) -> &'static str {
        match self {
            Solution::OneSolution(_) => "one solution",
            Solution::NoSolution => "no solutions",
            Solution::InfiniteSolutions => "infinite solutions",
            Solution::TwoRoots(_) => "two real roots",
            Solution::OneRoot(_) => "one real root",
            Solution::NoRealRoots => "no real roots",
        }
    }

    /// Real values of x satisfying the equation, ascending.
    ///
    /// Empty when there is no finite set of real solutions.
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Solution::OneSolution(x) | Solution::OneRoot(x) => vec![x],
            Solution::TwoRoots(roots) => roots.to_vec(),
            Solution::NoSolution | Solution::InfiniteSolutions | Solution::NoRealRoots => Vec::new(),
        }
    }
}

/// Complete result of one solve request.
///
/// Built once by a solver and handed to the caller; there are no mutating
/// methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionResult {
    equation_type: EquationType,
    normalized_form: String,
    steps: Vec<SolutionStep>,
    solution: Solution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discriminant: Option<f64>,
}

impl SolutionResult {
    pub(crate) fn new(
        equation_type: EquationType,
        normalized_form: String,
        steps: Vec<SolutionStep>,
        solution: Solution,
        discriminant: Option<f64>,
    ) -> Self {
        Self {
            equation_type,
            normalized_form,
            steps,
            solution,
            discriminant,
        }
    }

    /// Type of equation actually solved (`Linear` after degradation)
    pub fn equation_type(&self) -> EquationType {
        self.equation_type
    }

    /// Canonical zero-equals form, e.g. `2x - 10 = 0`
    pub fn normalized_form(&self) -> &str {
        &self.normalized_form
    }

    /// Ordered derivation steps
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    pub fn solution(&self) -> Solution {
        self.solution
    }

    /// Discriminant `b² - 4ac` (quadratic results only)
    pub fn discriminant(&self) -> Option<f64> {
        self.discriminant
    }

    /// Shorthand for `solution().label()`
    pub fn result_label(&self) -> &'static str {
        self.solution.label()
    }

    /// Shorthand for `solution().roots()`
    pub fn roots(&self) -> Vec<f64> {
        self.solution.roots()
    }
}
