//! Configuration for loading the grid table registry.

use serde::{Deserialize, Serialize};

/// Configuration for [`GridTableRegistry::load`](crate::GridTableRegistry::load).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Run the full consistency check when the registry is loaded.
    pub validate_on_load: bool,

    /// Absolute tolerance used by range and spacing checks.
    pub tolerance: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            validate_on_load: true,
            tolerance: 1e-6,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GRID_TABLES_VALIDATE_ON_LOAD") {
            config.validate_on_load = parse_bool(&val);
        }

        if let Ok(val) = std::env::var("GRID_TABLES_TOLERANCE") {
            if let Ok(tolerance) = val.parse() {
                config.tolerance = tolerance;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        check_tolerance(self.tolerance)
    }
}

/// Tolerances must be positive and finite; NaN would silently pass every check.
pub fn check_tolerance(tolerance: f64) -> Result<(), String> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(format!("tolerance must be a positive, finite number, got {}", tolerance));
    }

    Ok(())
}

fn parse_bool(val: &str) -> bool {
    val.to_lowercase() == "true" || val == "1"
}
