//! # Equation Normalizer
//!
//! Combines the partial coefficients of each side of an equation into the
//! zero-equals canonical form:
//!
//! - Linear: `Ax + B = 0` with `A = left_x - right_x`, `B = left_c - right_c`
//! - Quadratic: `Ax² + Bx + C = 0`, each coefficient `left - right`
//!
//! A quadratic whose leading coefficient is zero is degraded to the linear
//! form `Bx + C = 0`. No rounding happens here.

use serde::{Deserialize, Serialize};

use super::tokenizer::SideCoefficients;

/// Kind of equation requested by the caller or reported in a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationType {
    Linear,
    Quadratic,
}

impl EquationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquationType::Linear => "linear",
            EquationType::Quadratic => "quadratic",
        }
    }
}

impl std::fmt::Display for EquationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized coefficients, referred to one side of the equation equaling zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Coefficients {
    /// `a·x + b = 0`
    Linear { a: f64, b: f64 },
    /// `a·x² + b·x + c = 0`
    Quadratic { a: f64, b: f64, c: f64 },
}

impl Coefficients {
    pub fn linear(a: f64, b: f64) -> Self {
        Coefficients::Linear { a, b }
    }

    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        Coefficients::Quadratic { a, b, c }
    }

    /// Rewrite `0x² + bx + c = 0` as the linear `bx + c = 0`.
    ///
    /// Applies regardless of where the coefficients came from, so parsed
    /// text and direct input degrade identically.
    pub fn degrade(self) -> Self {
        match self {
            Coefficients::Quadratic { a, b, c } if a == 0.0 => {
                tracing::debug!(b, c, "zero leading coefficient, solving as linear");
                Coefficients::Linear { a: b, b: c }
            }
            other => other,
        }
    }

    /// True when every coefficient is a finite number.
    pub fn is_finite(&self) -> bool {
        match *self {
            Coefficients::Linear { a, b } => a.is_finite() && b.is_finite(),
            Coefficients::Quadratic { a, b, c } => a.is_finite() && b.is_finite() && c.is_finite(),
        }
    }

    pub fn equation_type(&self) -> EquationType {
        match self {
            Coefficients::Linear { .. } => EquationType::Linear,
            Coefficients::Quadratic { .. } => EquationType::Quadratic,
        }
    }
}

/// Combine both sides into the canonical form for `equation_type`, degrading
/// a quadratic with zero leading coefficient to linear.
pub fn combine(left: SideCoefficients, right: SideCoefficients, equation_type: EquationType) -> Coefficients {
    let coefficients = match equation_type {
        EquationType::Linear => Coefficients::linear(left.x - right.x, left.constant - right.constant),
        EquationType::Quadratic => Coefficients::quadratic(
            left.x_squared - right.x_squared,
            left.x - right.x,
            left.constant - right.constant,
        ),
    };
    coefficients.degrade()
}
