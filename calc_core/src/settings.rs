//! # Solver Settings
//!
//! Presentation settings shared by every solve. Settings only shape the
//! human-readable math and explanation strings; returned numbers are never
//! rounded.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::SolverSettings;
//!
//! let settings: SolverSettings = serde_json::from_str(r#"{ "display_decimals": 3 }"#).unwrap();
//! assert_eq!(settings.display_decimals, 3);
//! assert!(settings.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of decimals shown in derivation strings
pub const DEFAULT_DISPLAY_DECIMALS: usize = 6;

/// Largest supported display precision (f64 carries ~15-17 significant digits)
pub const MAX_DISPLAY_DECIMALS: usize = 15;

/// Settings applied to a solve request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Maximum decimals rendered in math strings (trailing zeros trimmed)
    pub display_decimals: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

impl SolverSettings {
    /// Settings with a custom display precision.
    pub fn with_decimals(display_decimals: usize) -> Self {
        SolverSettings { display_decimals }
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.display_decimals > MAX_DISPLAY_DECIMALS {
            return Err(CalcError::invalid_input(
                "display_decimals",
                self.display_decimals.to_string(),
                format!("Display precision cannot exceed {} decimals", MAX_DISPLAY_DECIMALS),
            ));
        }
        Ok(())
    }
}
