//! # Math String Formatting
//!
//! Rendering helpers for the derivation trail. Numbers are shown with at most
//! `decimals` places, trailing zeros trimmed, so `5.0` prints as `5` and
//! `-2.500000` as `-2.5`.
//!
//! ```rust
//! use calc_core::equations::format::NumberFormat;
//!
//! let fmt = NumberFormat::new(6);
//! assert_eq!(fmt.number(1.0 / 3.0), "0.333333");
//! assert_eq!(fmt.polynomial(&[(1.0, "x²"), (-5.0, "x"), (6.0, "")]), "x² - 5x + 6");
//! ```

/// Symbol used for the squared term in rendered equations
pub const SQUARED: &str = "x²";

/// Symbol used for the linear term in rendered equations
pub const LINEAR: &str = "x";

/// Fixed-precision number renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimals: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::new(crate::settings::DEFAULT_DISPLAY_DECIMALS)
    }
}

impl NumberFormat {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Render a number, trimming trailing zeros and never showing `-0`.
    pub fn number(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.decimals, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Render a number wrapped in parentheses for formula substitution, e.g. `(-3)`.
    pub fn paren(&self, value: f64) -> String {
        format!("({})", self.number(value))
    }

    /// Render `coefficient·variable` with a unit coefficient elided (`x`, `-x`, `3x`).
    pub fn term(&self, coefficient: f64, variable: &str) -> String {
        let digits = self.number(coefficient.abs());
        let sign = if coefficient < 0.0 && digits != "0" { "-" } else { "" };
        if variable.is_empty() {
            format!("{sign}{digits}")
        } else if digits == "1" {
            format!("{sign}{variable}")
        } else {
            format!("{sign}{digits}{variable}")
        }
    }

    /// Render a sum of terms, skipping zero coefficients. Renders `0` if every term is zero.
    pub fn polynomial(&self, terms: &[(f64, &str)]) -> String {
        self.signed_terms(terms, false)
    }

    /// Like [`polynomial`](Self::polynomial) but the leading term is always
    /// shown, even with a zero coefficient (`0x + 4`).
    pub fn polynomial_keep_leading(&self, terms: &[(f64, &str)]) -> String {
        self.signed_terms(terms, true)
    }

    fn signed_terms(&self, terms: &[(f64, &str)], keep_leading: bool) -> String {
        let mut out = String::new();
        for (i, &(coefficient, variable)) in terms.iter().enumerate() {
            if coefficient == 0.0 && !(keep_leading && i == 0) {
                continue;
            }
            let rendered = self.term(coefficient, variable);
            if out.is_empty() {
                out.push_str(&rendered);
            } else if let Some(magnitude) = rendered.strip_prefix('-') {
                out.push_str(" - ");
                out.push_str(magnitude);
            } else {
                out.push_str(" + ");
                out.push_str(&rendered);
            }
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_trims_trailing_zeros() {
        let fmt = NumberFormat::new(6);
        assert_eq!(fmt.number(5.0), "5");
        assert_eq!(fmt.number(-2.5), "-2.5");
        assert_eq!(fmt.number(2.0_f64.sqrt()), "1.414214");
    }

    #[test]
    fn test_negative_zero() {
        let fmt = NumberFormat::new(6);
        assert_eq!(fmt.number(-0.0), "0");
        assert_eq!(fmt.number(-0.0000001), "0");
    }

    #[test]
    fn test_unit_coefficients_elided() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.term(1.0, LINEAR), "x");
        assert_eq!(fmt.term(-1.0, SQUARED), "-x²");
        assert_eq!(fmt.term(3.5, LINEAR), "3.5x");
        assert_eq!(fmt.term(-4.0, ""), "-4");
    }

    #[test]
    fn test_polynomial_signs() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.polynomial(&[(2.0, LINEAR), (-6.0, "")]), "2x - 6");
        assert_eq!(fmt.polynomial(&[(-1.0, SQUARED), (0.0, LINEAR), (1.0, "")]), "-x² + 1");
        assert_eq!(fmt.polynomial(&[(0.0, LINEAR), (0.0, "")]), "0");
    }

    #[test]
    fn test_keep_leading_zero_term() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.polynomial_keep_leading(&[(0.0, LINEAR), (4.0, "")]), "0x + 4");
        assert_eq!(fmt.polynomial_keep_leading(&[(0.0, LINEAR), (0.0, "")]), "0x");
    }
}
