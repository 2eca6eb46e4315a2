//! # Linear Solver
//!
//! Solves `ax + b = 0`. The three outcomes are checked in order:
//!
//! 1. `a = 0, b = 0` - true for every x (infinite solutions)
//! 2. `a = 0, b ≠ 0` - false for every x (no solutions)
//! 3. `a ≠ 0` - exactly one solution, `x = -b / a`
//!
//! A quotient that overflows the f64 range is reported as
//! [`CalcError::CalculationFailed`].

use super::format::{NumberFormat, LINEAR};
use super::normalize::EquationType;
use super::solution::{Solution, SolutionResult};
use super::steps::StepRecorder;
use crate::errors::{CalcError, CalcResult};

/// Render `ax + b = 0`, always showing the x term (`0x + 4 = 0`).
pub fn linear_form(a: f64, b: f64, fmt: &NumberFormat) -> String {
    format!("{} = 0", fmt.polynomial_keep_leading(&[(a, LINEAR), (b, "")]))
}

/// Solve `ax + b = 0`, appending the derivation to `steps`.
pub fn solve_linear(a: f64, b: f64, fmt: &NumberFormat, mut steps: StepRecorder) -> CalcResult<SolutionResult> {
    let normalized_form = linear_form(a, b, fmt);
    steps.record(
        "Normalized form",
        normalized_form.clone(),
        "Move every term to the left side so the equation reads ax + b = 0",
    );

    let solution = if a == 0.0 {
        let math = format!("{} = 0", fmt.number(b));
        if b == 0.0 {
            steps.record(
                "Analyze the equation",
                math,
                "The x terms cancel and 0 = 0 holds for every value of x, so there are infinitely many solutions",
            );
            Solution::InfiniteSolutions
        } else {
            steps.record(
                "Analyze the equation",
                math,
                format!(
                    "The x terms cancel and {} = 0 is false for every value of x, so the equation has no solutions",
                    fmt.number(b)
                ),
            );
            Solution::NoSolution
        }
    } else {
        let rhs = -b;
        let explanation = if b < 0.0 {
            format!("Add {} to both sides", fmt.number(rhs))
        } else {
            format!("Subtract {} from both sides", fmt.number(b))
        };
        steps.record("Isolate x", format!("{} = {}", fmt.term(a, LINEAR), fmt.number(rhs)), explanation);

        let x = clean_zero(rhs / a);
        if !x.is_finite() {
            tracing::warn!(a, b, "linear solution overflows f64");
            return Err(CalcError::calculation_failed(
                EquationType::Linear.as_str(),
                format!("x = {} / {} overflows the f64 range", rhs, a),
            ));
        }
        steps.record(
            "Solution",
            format!("x = {} / {} = {}", fmt.number(rhs), fmt.paren(a), fmt.number(x)),
            format!("Divide both sides by {}", fmt.number(a)),
        );
        Solution::OneSolution(x)
    };

    tracing::debug!(a, b, outcome = solution.label(), "solved linear equation");
    Ok(SolutionResult::new(EquationType::Linear, normalized_form, steps.into_steps(), solution, None))
}

/// Collapse `-0.0` to `0.0` so results never report a negative zero.
pub(crate) fn clean_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
