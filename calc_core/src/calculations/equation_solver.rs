//! # Equation Solver Calculation
//!
//! Solves a linear or quadratic equation given either its coefficients or
//! free-form text, returning the solution and a step-by-step derivation.
//!
//! ## Behavior
//!
//! - Coefficient mode uses `a`, `b` (and `c` for quadratics, default 0) directly
//! - Equation mode parses the text; the original text is recorded as the first step
//! - A quadratic with `a = 0` is solved as linear and reported as `linear`,
//!   whichever mode supplied the zero
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use calc_core::calculations::equation_solver::{solve_equation, EquationInput};
//! use calc_core::equations::{EquationType, Solution};
//!
//! let input = EquationInput::equation(EquationType::Quadratic, "x^2 + 5x + 6 = 0");
//! let result = solve_equation(&input).unwrap();
//!
//! assert_eq!(result.solution(), Solution::TwoRoots([-3.0, -2.0]));
//! assert_eq!(result.discriminant(), Some(1.0));
//! println!("{}", result.normalized_form());
//! for step in result.steps() {
//!     println!("{}: {}", step.title, step.math);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::format::NumberFormat;
use crate::equations::{parse_equation, solve_coefficients, Coefficients, EquationType, SolutionResult, StepRecorder};
use crate::errors::{CalcError, CalcResult};
use crate::settings::SolverSettings;

/// Input parameters for the equation solver.
///
/// ## JSON Example (Coefficients)
///
/// ```json
/// {
///   "input_mode": "coefficients",
///   "equation_type": "quadratic",
///   "a": 1.0,
///   "b": 5.0,
///   "c": 6.0
/// }
/// ```
///
/// ## JSON Example (Equation Text)
///
/// ```json
/// {
///   "input_mode": "equation",
///   "equation_type": "linear",
///   "equation_text": "2x + 5 = 15"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input_mode", rename_all = "snake_case")]
pub enum EquationInput {
    /// Coefficients of `ax + b = 0` or `ax² + bx + c = 0`
    Coefficients {
        equation_type: EquationType,
        #[serde(default)]
        a: Option<f64>,
        #[serde(default)]
        b: Option<f64>,
        /// Constant term for quadratics (defaults to 0; ignored for linear)
        #[serde(default)]
        c: Option<f64>,
    },
    /// Free-form equation text such as `"3x - 2 = x + 4"`
    Equation {
        equation_type: EquationType,
        equation_text: String,
    },
}

impl EquationInput {
    /// Coefficient-mode input for `ax + b = 0`
    pub fn linear(a: f64, b: f64) -> Self {
        EquationInput::Coefficients {
            equation_type: EquationType::Linear,
            a: Some(a),
            b: Some(b),
            c: None,
        }
    }

    /// Coefficient-mode input for `ax² + bx + c = 0`
    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        EquationInput::Coefficients {
            equation_type: EquationType::Quadratic,
            a: Some(a),
            b: Some(b),
            c: Some(c),
        }
    }

    /// Equation-mode input
    pub fn equation(equation_type: EquationType, equation_text: impl Into<String>) -> Self {
        EquationInput::Equation {
            equation_type,
            equation_text: equation_text.into(),
        }
    }

    /// Equation type requested by the caller (before any degradation)
    pub fn equation_type(&self) -> EquationType {
        match self {
            EquationInput::Coefficients { equation_type, .. } | EquationInput::Equation { equation_type, .. } => {
                *equation_type
            }
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.coefficients().map(|_| ())
    }

    /// Resolve the normalized coefficients for this input.
    ///
    /// # Errors
    ///
    /// - `MissingField` if `a` or `b` is absent in coefficient mode
    /// - `InvalidInput` if a coefficient is NaN or infinite
    /// - `EquationParse` if the equation text cannot be interpreted
    pub fn coefficients(&self) -> CalcResult<Coefficients> {
        match self {
            EquationInput::Coefficients { equation_type, a, b, c } => {
                let a = require_finite("a", *a)?;
                let b = require_finite("b", *b)?;
                Ok(match equation_type {
                    EquationType::Linear => Coefficients::linear(a, b),
                    EquationType::Quadratic => {
                        let c = require_finite("c", Some(c.unwrap_or(0.0)))?;
                        Coefficients::quadratic(a, b, c)
                    }
                })
            }
            EquationInput::Equation { equation_type, equation_text } => parse_equation(equation_text, *equation_type),
        }
    }
}

fn require_finite(field: &str, value: Option<f64>) -> CalcResult<f64> {
    let value = value.ok_or_else(|| CalcError::missing_field(field))?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Coefficient must be a finite number",
        ));
    }
    Ok(value)
}

/// Solve an equation with default [`SolverSettings`].
///
/// # Returns
///
/// * `Ok(SolutionResult)` - Solution with ordered derivation steps
/// * `Err(CalcError)` - If inputs are missing, non-finite or unparseable
pub fn solve_equation(input: &EquationInput) -> CalcResult<SolutionResult> {
    solve_equation_with(input, &SolverSettings::default())
}

/// Solve an equation with explicit settings.
pub fn solve_equation_with(input: &EquationInput, settings: &SolverSettings) -> CalcResult<SolutionResult> {
    settings.validate()?;

    let coefficients = input.coefficients()?;
    let fmt = NumberFormat::new(settings.display_decimals);

    let mut steps = StepRecorder::new();
    if let EquationInput::Equation { equation_text, .. } = input {
        steps.record(
            "Original equation",
            equation_text.trim(),
            "Collect the x², x and constant terms on each side of the equals sign",
        );
    }

    solve_coefficients(coefficients, &fmt, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::Solution;
    use approx::assert_relative_eq;

    fn text(equation_type: EquationType, equation_text: &str) -> CalcResult<SolutionResult> {
        solve_equation(&EquationInput::equation(equation_type, equation_text))
    }

    #[test]
    fn test_linear_text() {
        let result = text(EquationType::Linear, "2x + 5 = 15").unwrap();
        assert_eq!(result.solution(), Solution::OneSolution(5.0));
        assert_eq!(result.normalized_form(), "2x - 10 = 0");
    }

    #[test]
    fn test_quadratic_text() {
        let result = text(EquationType::Quadratic, "x^2 + 5x + 6 = 0").unwrap();
        assert_eq!(result.equation_type(), EquationType::Quadratic);
        assert_eq!(result.roots(), vec![-3.0, -2.0]);
        assert_eq!(result.discriminant(), Some(1.0));
    }

    #[test]
    fn test_repeated_root_from_coefficients() {
        let result = solve_equation(&EquationInput::quadratic(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(result.solution(), Solution::OneRoot(0.0));
        assert_eq!(result.discriminant(), Some(0.0));
    }

    #[test]
    fn test_no_real_roots_from_coefficients() {
        let result = solve_equation(&EquationInput::quadratic(1.0, 0.0, 1.0)).unwrap();
        assert_eq!(result.discriminant(), Some(-4.0));
        assert_eq!(result.result_label(), "no real roots");
    }

    #[test]
    fn test_identity_text() {
        let result = text(EquationType::Linear, "3 = 3").unwrap();
        assert_eq!(result.result_label(), "infinite solutions");
    }

    #[test]
    fn test_contradiction_text() {
        let result = text(EquationType::Linear, "0x + 4 = 0").unwrap();
        assert_eq!(result.result_label(), "no solutions");
    }

    #[test]
    fn test_text_mode_prepends_original_equation() {
        let result = text(EquationType::Linear, "  3x - 2 = x + 4 ").unwrap();
        assert_eq!(result.steps()[0].title, "Original equation");
        assert_eq!(result.steps()[0].math, "3x - 2 = x + 4");
        assert_eq!(result.steps()[1].title, "Normalized form");
        assert_relative_eq!(result.roots()[0], 3.0);

        let direct = solve_equation(&EquationInput::linear(2.0, -6.0)).unwrap();
        assert_eq!(direct.steps()[0].title, "Normalized form");
        assert_eq!(result.steps().len(), direct.steps().len() + 1);
    }

    #[test]
    fn test_degradation_matches_direct_linear() {
        let degraded = solve_equation(&EquationInput::quadratic(0.0, 2.0, -6.0)).unwrap();
        let direct = solve_equation(&EquationInput::linear(2.0, -6.0)).unwrap();
        assert_eq!(degraded.equation_type(), EquationType::Linear);
        assert_eq!(degraded, direct);

        let parsed = text(EquationType::Quadratic, "0x^2 + 2x - 6 = 0").unwrap();
        assert_eq!(parsed.equation_type(), EquationType::Linear);
        assert_eq!(parsed.solution(), direct.solution());
        assert_eq!(parsed.normalized_form(), direct.normalized_form());
    }

    #[test]
    fn test_missing_coefficient() {
        let input = EquationInput::Coefficients {
            equation_type: EquationType::Linear,
            a: None,
            b: Some(1.0),
            c: None,
        };
        assert_eq!(solve_equation(&input).unwrap_err(), CalcError::missing_field("a"));
    }

    #[test]
    fn test_quadratic_c_defaults_to_zero() {
        let input = EquationInput::Coefficients {
            equation_type: EquationType::Quadratic,
            a: Some(1.0),
            b: Some(-3.0),
            c: None,
        };
        assert_eq!(solve_equation(&input).unwrap().roots(), vec![0.0, 3.0]);
    }

    #[test]
    fn test_non_finite_coefficient() {
        let err = solve_equation(&EquationInput::linear(f64::NAN, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_oversized_literal_in_text() {
        let big = format!("1{}", "0".repeat(310));
        let cases = [
            (EquationType::Linear, format!("{big} = {big}")),
            (EquationType::Linear, format!("{big}x = 5")),
            (EquationType::Quadratic, format!("x^2 + {big}x = 0")),
        ];
        for (equation_type, equation_text) in cases {
            let err = text(equation_type, &equation_text).unwrap_err();
            assert_eq!(err.error_code(), "EQUATION_PARSE", "{}", equation_text);
            assert!(err.to_string().contains("number too large"));
        }
    }

    #[test]
    fn test_overflow_from_finite_coefficients() {
        let err = solve_equation(&EquationInput::quadratic(1.0, 1e200, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        let err = solve_equation(&EquationInput::linear(1e-300, 1e300)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_unparseable_text() {
        let err = text(EquationType::Linear, "2xy + 5 = 15").unwrap_err();
        assert_eq!(err.error_code(), "EQUATION_PARSE");
        assert!(err.to_string().contains("2xy + 5 = 15"));
    }

    #[test]
    fn test_custom_precision() {
        let input = EquationInput::linear(3.0, -1.0);
        let result = solve_equation_with(&input, &SolverSettings::with_decimals(2)).unwrap();
        assert_eq!(result.steps().last().unwrap().math, "x = 1 / (3) = 0.33");
        assert_relative_eq!(result.roots()[0], 1.0 / 3.0);
    }

    #[test]
    fn test_input_json() {
        let input: EquationInput = serde_json::from_str(
            r#"{ "input_mode": "coefficients", "equation_type": "quadratic", "a": 1, "b": 5, "c": 6 }"#,
        )
        .unwrap();
        assert_eq!(input, EquationInput::quadratic(1.0, 5.0, 6.0));

        let input: EquationInput = serde_json::from_str(
            r#"{ "input_mode": "equation", "equation_type": "linear", "equation_text": "2x + 5 = 15" }"#,
        )
        .unwrap();
        assert_eq!(input.equation_type(), EquationType::Linear);
    }

    #[test]
    fn test_idempotent() {
        let input = EquationInput::equation(EquationType::Quadratic, "2x^2 - 3x - 7 = 0");
        let first = solve_equation(&input).unwrap();
        let second = solve_equation(&input).unwrap();
        assert_eq!(first, second);
    }
}
