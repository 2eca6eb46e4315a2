//! # Equation Tokenizer
//!
//! Turns free-form equation text such as `"3x - 2 = x + 4"` or
//! `"x^2 + 5x + 6 = 0"` into signed coefficients for the `x²`, `x` and
//! constant terms of each side.
//!
//! Each side is scanned one character at a time by a small state machine
//! that accumulates the sign, the digits and the power of `x` for the term in
//! progress. A term is committed when the next sign (or the end of the side)
//! is reached, so `x^2` is recognized as a whole and its `x` is never counted
//! as a separate linear term.
//!
//! ## Accepted grammar (per side, whitespace removed)
//!
//! ```text
//! side     := term (sign term)*
//! term     := sign? ( number ('*'? 'x' power?)? | 'x' power? )
//! power    := '^' digits          (only ^2 is supported)
//! sign     := ('+' | '-')+        (consecutive signs are folded: "- -3" is +3)
//! number   := digits ('.' digits?)? | '.' digits
//! ```
//!
//! Anything else (parentheses, other letters, `x^3`, `2xy`) is rejected
//! instead of being silently dropped.

use thiserror::Error;

use super::normalize::{combine, Coefficients, EquationType};
use crate::errors::{CalcError, CalcResult};

/// Coefficients collected from one side of an equation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideCoefficients {
    /// Sum of the `x²` coefficients
    pub x_squared: f64,
    /// Sum of the `x` coefficients
    pub x: f64,
    /// Sum of the standalone constants
    pub constant: f64,
}

/// Power of `x` carried by a single term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    Constant,
    Linear,
    Squared,
}

/// Why one side of an equation could not be tokenized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("nothing to parse")]
    EmptySide,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("expected 'x' after '*' at position {position}")]
    MissingVariable { position: usize },

    #[error("expected an exponent after '^' at position {position}")]
    MissingExponent { position: usize },

    #[error("'{literal}' is not a valid number")]
    MalformedNumber { literal: String },

    #[error("number too large: '{literal}' exceeds the f64 range")]
    NumberTooLarge { literal: String },

    #[error("x^{exponent} is not supported, only x^2 and x terms are")]
    UnsupportedExponent { exponent: String },

    #[error("the expression ends with a dangling operator")]
    DanglingOperator,

    #[error("x^2 term found in a linear equation, solve it as quadratic instead")]
    SquaredTermInLinear,
}

/// Scanner position within a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Beginning of the side; an optional sign may follow
    Start,
    /// Read one or more signs, waiting for a number or `x`
    Sign,
    /// Inside the numeric coefficient/constant
    Number,
    /// Read `*` after a number, `x` must follow
    Star,
    /// Read `x`
    Variable,
    /// Read `^`, exponent digits must follow
    Caret,
    /// Inside the exponent digits
    Exponent,
}

/// Accumulator for the term currently being scanned.
#[derive(Debug, Default)]
struct PendingTerm {
    negative: bool,
    digits: String,
    variable: bool,
    exponent: String,
}

impl PendingTerm {
    fn finish(&mut self, equation_type: EquationType) -> Result<(f64, Power), TokenError> {
        let term = std::mem::take(self);

        let magnitude = if term.digits.is_empty() {
            1.0
        } else {
            term.digits
                .parse::<f64>()
                .map_err(|_| TokenError::MalformedNumber { literal: term.digits.clone() })?
        };
        if !magnitude.is_finite() {
            return Err(TokenError::NumberTooLarge { literal: term.digits });
        }
        let coefficient = if term.negative { -magnitude } else { magnitude };

        let power = match (term.variable, term.exponent.as_str()) {
            (false, _) => Power::Constant,
            (true, "") => Power::Linear,
            (true, "2") => Power::Squared,
            (true, _) => return Err(TokenError::UnsupportedExponent { exponent: term.exponent.clone() }),
        };

        if power == Power::Squared && equation_type == EquationType::Linear {
            return Err(TokenError::SquaredTermInLinear);
        }

        Ok((coefficient, power))
    }
}

/// Canonicalize raw user text: strip whitespace, lowercase `X`, and rewrite
/// `x²` as `x^2` and the Unicode minus as `-`.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            c if c.is_whitespace() => {}
            'X' => out.push('x'),
            '²' => out.push_str("^2"),
            '−' => out.push('-'),
            c => out.push(c),
        }
    }
    out
}

/// Extract the signed coefficients from one side of a normalized equation.
///
/// `side` must already be whitespace-free (see [`normalize_text`]). In linear
/// mode an `x^2` term is an error.
pub fn parse_side(side: &str, equation_type: EquationType) -> Result<SideCoefficients, TokenError> {
    let mut totals = SideCoefficients::default();
    let mut term = PendingTerm::default();
    let mut state = State::Start;

    let mut commit = |term: &mut PendingTerm| -> Result<(), TokenError> {
        let (coefficient, power) = term.finish(equation_type)?;
        tracing::trace!(coefficient, ?power, "term");
        match power {
            Power::Squared => totals.x_squared += coefficient,
            Power::Linear => totals.x += coefficient,
            Power::Constant => totals.constant += coefficient,
        }
        Ok(())
    };

    for (position, ch) in side.chars().enumerate() {
        state = match (state, ch) {
            (State::Start | State::Sign, '+') => State::Sign,
            (State::Start | State::Sign, '-') => {
                term.negative = !term.negative;
                State::Sign
            }
            (State::Start | State::Sign | State::Number, '0'..='9' | '.') => {
                term.digits.push(ch);
                State::Number
            }
            (State::Start | State::Sign | State::Number | State::Star, 'x') => {
                term.variable = true;
                State::Variable
            }
            (State::Number, '*') => State::Star,
            (State::Star, _) => return Err(TokenError::MissingVariable { position }),
            (State::Variable, '^') => State::Caret,
            (State::Caret | State::Exponent, '0'..='9') => {
                term.exponent.push(ch);
                State::Exponent
            }
            (State::Caret, _) => return Err(TokenError::MissingExponent { position }),
            (State::Number | State::Variable | State::Exponent, '+' | '-') => {
                commit(&mut term)?;
                term.negative = ch == '-';
                State::Sign
            }
            (_, ch) => return Err(TokenError::UnexpectedChar { ch, position }),
        };
    }

    match state {
        State::Start => return Err(TokenError::EmptySide),
        State::Sign => return Err(TokenError::DanglingOperator),
        State::Star => return Err(TokenError::MissingVariable { position: side.chars().count() }),
        State::Caret => return Err(TokenError::MissingExponent { position: side.chars().count() }),
        State::Number | State::Variable | State::Exponent => commit(&mut term)?,
    }

    Ok(totals)
}

/// Parse equation text into normalized coefficients.
///
/// The text must contain exactly one `=`. The returned coefficients are
/// already degraded to linear when a quadratic has no `x²` term left.
///
/// # Errors
///
/// Returns [`CalcError::EquationParse`] echoing the original text, the reason
/// and two canonical examples.
pub fn parse_equation(text: &str, equation_type: EquationType) -> CalcResult<Coefficients> {
    let normalized = normalize_text(text);

    let sides: Vec<&str> = normalized.split('=').collect();
    let (left, right) = match sides.as_slice() {
        [left, right] => (*left, *right),
        [_] => return Err(CalcError::equation_parse(text, "missing '=' sign")),
        _ => return Err(CalcError::equation_parse(text, "more than one '=' sign")),
    };

    let left = parse_side(left, equation_type)
        .map_err(|err| CalcError::equation_parse(text, format!("left side: {}", err)))?;
    let right = parse_side(right, equation_type)
        .map_err(|err| CalcError::equation_parse(text, format!("right side: {}", err)))?;

    let coefficients = combine(left, right, equation_type);
    if !coefficients.is_finite() {
        return Err(CalcError::equation_parse(text, "number too large, coefficients overflow the f64 range"));
    }
    tracing::debug!(text, %equation_type, ?coefficients, "parsed equation");
    Ok(coefficients)
}
