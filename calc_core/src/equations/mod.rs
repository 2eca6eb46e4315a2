//! # Algebraic Equations
//!
//! Parsing and closed-form solving of linear and quadratic equations in one
//! unknown `x`, with an ordered derivation trail for display.
//!
//! ## Pipeline
//!
//! ```text
//! text ──► tokenizer ──► normalize ──┬──► linear    ──► SolutionResult
//!                                    └──► quadratic ──►   (+ steps)
//! ```
//!
//! - [`tokenizer`] - per-side coefficient extraction from equation text
//! - [`normalize`] - zero-equals canonical form and quadratic → linear degradation
//! - [`linear`] - `ax + b = 0`
//! - [`quadratic`] - `ax² + bx + c = 0` via the discriminant
//! - [`steps`] - ordered derivation steps
//! - [`solution`] - outcome and result records
//! - [`format`] - number and polynomial rendering for math strings
//!
//! ## Sign Conventions
//!
//! - All terms are moved to the left side: `left - right = 0`
//! - Quadratic roots are reported in ascending order
//! - Returned numbers are unrounded; only math strings are rounded for display

pub mod format;
pub mod linear;
pub mod normalize;
pub mod quadratic;
pub mod solution;
pub mod steps;
pub mod tokenizer;

// Re-export commonly used items
pub use linear::{linear_form, solve_linear};
pub use normalize::{combine, Coefficients, EquationType};
pub use quadratic::{discriminant, quadratic_form, solve_quadratic};
pub use solution::{Solution, SolutionResult};
pub use steps::{SolutionStep, StepRecorder};
pub use tokenizer::{parse_equation, parse_side, SideCoefficients, TokenError};

use format::NumberFormat;

use crate::errors::CalcResult;

/// Dispatch normalized coefficients to the matching solver.
///
/// A quadratic with `a = 0` is degraded first, so the result reports
/// [`EquationType::Linear`]. Fails only when the arithmetic overflows f64.
pub fn solve_coefficients(
    coefficients: Coefficients,
    fmt: &NumberFormat,
    steps: StepRecorder,
) -> CalcResult<SolutionResult> {
    match coefficients.degrade() {
        Coefficients::Linear { a, b } => solve_linear(a, b, fmt, steps),
        Coefficients::Quadratic { a, b, c } => solve_quadratic(a, b, c, fmt, steps),
    }
}
