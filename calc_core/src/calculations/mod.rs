//! # Calculations
//!
//! This module contains all caller-facing calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function `(&input) -> Result<*Result, CalcError>`
//!
//! ## Registry
//!
//! Calculations can also be invoked by name over JSON text, which is how
//! hosting layers (web handlers, the CLI, LLM tools) reach them:
//!
//! ```rust
//! use calc_core::calculations::calculate_json;
//! use calc_core::settings::SolverSettings;
//!
//! let output = calculate_json(
//!     "equation_solver",
//!     r#"{ "input_mode": "equation", "equation_type": "linear", "equation_text": "2x + 5 = 15" }"#,
//!     &SolverSettings::default(),
//! ).unwrap();
//! assert!(output.contains("one_solution"));
//! ```
//!
//! ## Available Calculations
//!
//! - [`equation_solver`] - Linear and quadratic equations with derivation steps

pub mod equation_solver;

use serde::{Deserialize, Serialize};

use crate::equations::SolutionResult;
use crate::errors::{CalcError, CalcResult};
use crate::settings::SolverSettings;

// Re-export commonly used types
pub use equation_solver::{solve_equation, solve_equation_with, EquationInput};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
///
/// ```json
/// {
///   "type": "EquationSolver",
///   "input": { "input_mode": "coefficients", "equation_type": "linear", "a": 2, "b": -6 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "input")]
pub enum CalculationItem {
    /// Linear/quadratic equation solver
    EquationSolver(EquationInput),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::EquationSolver(_) => "EquationSolver",
        }
    }

    /// Run the calculation.
    pub fn calculate(&self, settings: &SolverSettings) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::EquationSolver(input) => {
                solve_equation_with(input, settings).map(CalculationOutput::EquationSolver)
            }
        }
    }
}

/// Result of running a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "result")]
pub enum CalculationOutput {
    EquationSolver(SolutionResult),
}

type JsonCalculation = fn(&str, &SolverSettings) -> CalcResult<String>;

/// Name → calculation lookup table for JSON callers
const REGISTRY: &[(&str, JsonCalculation)] = &[("equation_solver", equation_solver_json)];

fn equation_solver_json(json: &str, settings: &SolverSettings) -> CalcResult<String> {
    let input: EquationInput = serde_json::from_str(json)?;
    let result = solve_equation_with(&input, settings)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Names accepted by [`calculate_json`]
pub fn available_calculations() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Run the calculation registered under `name` on a JSON input document,
/// returning the result as pretty-printed JSON.
///
/// # Errors
///
/// - `UnknownCalculation` if no calculation has that name
/// - `SerializationError` if the JSON does not match the calculation's input
/// - any error raised by the calculation itself
pub fn calculate_json(name: &str, json: &str, settings: &SolverSettings) -> CalcResult<String> {
    let (_, calculation) = REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .ok_or_else(|| CalcError::unknown_calculation(name))?;
    calculation(json, settings)
}
