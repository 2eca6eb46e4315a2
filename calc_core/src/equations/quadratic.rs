//! # Quadratic Solver
//!
//! Solves `ax² + bx + c = 0` with `a ≠ 0` through the discriminant
//! `D = b² - 4ac`:
//!
//! - `D > 0` - two distinct real roots `(-b ± √D) / 2a`, reported ascending
//! - `D = 0` - one repeated root `-b / 2a`
//! - `D < 0` - no real roots; the complex pair only appears in the math text
//!
//! Roots are returned unrounded. A discriminant or root outside the f64
//! range is reported as [`CalcError::CalculationFailed`] rather than as an
//! infinite or NaN value. Callers route `a = 0` to the linear solver
//! (see [`Coefficients::degrade`](super::normalize::Coefficients::degrade)).

use super::format::{NumberFormat, LINEAR, SQUARED};
use super::linear::clean_zero;
use super::normalize::EquationType;
use super::solution::{Solution, SolutionResult};
use super::steps::StepRecorder;
use crate::errors::{CalcError, CalcResult};

/// Discriminant `b² - 4ac`
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Render `ax² + bx + c = 0`, omitting zero terms.
pub fn quadratic_form(a: f64, b: f64, c: f64, fmt: &NumberFormat) -> String {
    format!("{} = 0", fmt.polynomial(&[(a, SQUARED), (b, LINEAR), (c, "")]))
}

/// Solve `ax² + bx + c = 0` (`a ≠ 0`), appending the derivation to `steps`.
pub fn solve_quadratic(
    a: f64,
    b: f64,
    c: f64,
    fmt: &NumberFormat,
    mut steps: StepRecorder,
) -> CalcResult<SolutionResult> {
    let normalized_form = quadratic_form(a, b, c, fmt);
    steps.record(
        "Normalized form",
        normalized_form.clone(),
        format!(
            "Standard form ax² + bx + c = 0 with a = {}, b = {}, c = {}",
            fmt.number(a),
            fmt.number(b),
            fmt.number(c)
        ),
    );

    let d = discriminant(a, b, c);
    if !d.is_finite() {
        tracing::warn!(a, b, c, "discriminant overflows f64");
        return Err(overflow(format!("discriminant {}² - 4({})({}) overflows the f64 range", b, a, c)));
    }
    steps.record(
        "Calculate discriminant",
        format!(
            "D = b² - 4ac = {}² - 4{}{} = {}",
            fmt.paren(b),
            fmt.paren(a),
            fmt.paren(c),
            fmt.number(d)
        ),
        "The sign of the discriminant determines how many real roots exist",
    );

    let two_a = 2.0 * a;
    let solution = if d > 0.0 {
        steps.record(
            "Nature of roots",
            format!("D = {} > 0", fmt.number(d)),
            "A positive discriminant gives two distinct real roots",
        );

        let sqrt_d = d.sqrt();
        let mut roots = [clean_zero((-b - sqrt_d) / two_a), clean_zero((-b + sqrt_d) / two_a)];
        if roots.iter().any(|root| !root.is_finite()) {
            return Err(overflow(format!("roots of D = {} over 2a = {} overflow the f64 range", d, two_a)));
        }
        roots.sort_by(f64::total_cmp);
        steps.record(
            "Calculate roots",
            format!(
                "x = (-b ± √D) / 2a = ({} ± √{}) / {} → x₁ = {}, x₂ = {}",
                fmt.number(-b),
                fmt.number(d),
                fmt.number(two_a),
                fmt.number(roots[0]),
                fmt.number(roots[1])
            ),
            "Apply the quadratic formula once with each sign of the square root",
        );
        Solution::TwoRoots(roots)
    } else if d == 0.0 {
        steps.record(
            "Nature of roots",
            "D = 0",
            "A zero discriminant gives one repeated real root",
        );

        let root = clean_zero(-b / two_a);
        if !root.is_finite() {
            return Err(overflow(format!("root {} / {} overflows the f64 range", -b, two_a)));
        }
        steps.record(
            "Calculate root",
            format!("x = -b / 2a = {} / {} = {}", fmt.number(-b), fmt.number(two_a), fmt.number(root)),
            "With D = 0 both signs of the quadratic formula give the same value",
        );
        Solution::OneRoot(root)
    } else {
        steps.record(
            "Nature of roots",
            format!("D = {} < 0", fmt.number(d)),
            "A negative discriminant means the roots are a complex conjugate pair, so there are no real roots",
        );

        let real = clean_zero(-b / two_a);
        let imaginary = (-d).sqrt() / two_a.abs();
        steps.record(
            "Calculate complex roots",
            format!(
                "x = (-b ± i√-D) / 2a = {} ± {}i",
                fmt.number(real),
                fmt.number(imaginary)
            ),
            "These complex roots are shown for reference only; the equation has no real solutions",
        );
        Solution::NoRealRoots
    };

    tracing::debug!(a, b, c, discriminant = d, outcome = solution.label(), "solved quadratic equation");
    Ok(SolutionResult::new(
        EquationType::Quadratic,
        normalized_form,
        steps.into_steps(),
        solution,
        Some(d),
    ))
}

fn overflow(reason: String) -> CalcError {
    CalcError::calculation_failed(EquationType::Quadratic.as_str(), reason)
}
