//! # calc_core - Calculator Engine
//!
//! `calc_core` is the computational heart of Tally, providing calculator
//! functions with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it easy to host behind web handlers, a CLI or
//! AI assistants.
//!
//! The centerpiece is the equation solver: it reads free-form algebraic text
//! (`"2x + 5 = 15"`, `"x^2 + 5x + 6 = 0"`), normalizes it, solves it in closed
//! form and explains each step.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{solve_equation, EquationInput, EquationType};
//!
//! let input = EquationInput::equation(EquationType::Linear, "2x + 5 = 15");
//! let result = solve_equation(&input).unwrap();
//!
//! assert_eq!(result.roots(), vec![5.0]);
//!
//! // Serialize to JSON for display or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - Tokenizer, normalizer, solvers and derivation steps
//! - [`calculations`] - Caller-facing calculations and the name registry
//! - [`settings`] - Display settings
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! The crate emits `tracing` events (parsing at `debug`/`trace`, solver
//! outcomes at `debug`) and never installs a subscriber itself.

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_json, solve_equation, solve_equation_with, CalculationItem, EquationInput};
pub use equations::{EquationType, Solution, SolutionResult, SolutionStep};
pub use errors::{CalcError, CalcResult};
pub use settings::SolverSettings;
