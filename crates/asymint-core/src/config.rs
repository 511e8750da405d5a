//! Presentation and comparison settings for AINs
//!
//! Arithmetic itself has no knobs. This covers how values are printed and how
//! loosely they are compared, for consumers that print or compare results.

use crate::ain::DEFAULT_DISPLAY_PRECISION;
use crate::{Ain, ConfigError};
use serde::{Deserialize, Serialize};

/// Largest precision that still changes the printed value of an f64
const MAX_DISPLAY_PRECISION: usize = 17;

/// Settings for formatting and approximate comparison
///
/// # Examples
///
/// ```
/// use asymint_core::{Ain, AinConfig};
///
/// let config = AinConfig::from_toml_str("display_precision = 2").unwrap();
/// let a = Ain::new(0.0, 10.0, 8.0).unwrap();
/// assert_eq!(config.format(&a), "[0.00, 10.00]_{8.00}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AinConfig {
    /// Decimal places used when formatting
    /// Default: 4
    pub display_precision: usize,

    /// Absolute tolerance for component-wise equality
    /// Default: 1e-9
    pub tolerance: f64,
}

impl Default for AinConfig {
    fn default() -> Self {
        Self {
            display_precision: DEFAULT_DISPLAY_PRECISION,
            tolerance: 1e-9,
        }
    }
}

impl AinConfig {
    /// Exact comparison, full precision output
    pub fn strict() -> Self {
        Self {
            display_precision: MAX_DISPLAY_PRECISION,
            tolerance: 0.0,
        }
    }

    /// Short output, loose comparison
    pub fn lenient() -> Self {
        Self {
            display_precision: 2,
            tolerance: 1e-6,
        }
    }

    /// Parse and validate a TOML document
    ///
    /// Settings are read from an `[ain]` table when the document has one,
    /// otherwise from the top level.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML, [`ConfigError::Invalid`]
    /// if the values fail [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut document: toml::Table = toml::from_str(source)?;
        let settings = match document.remove("ain") {
            Some(section) => section,
            None => toml::Value::Table(document),
        };
        let config: AinConfig = settings.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "display_precision cannot exceed {}, got {}",
                MAX_DISPLAY_PRECISION, self.display_precision
            )));
        }
        Ok(())
    }

    /// Format an AIN with the configured precision
    pub fn format(&self, ain: &Ain) -> String {
        format!("{:.*}", self.display_precision, ain)
    }

    /// Compare two AINs component-wise within the configured tolerance
    pub fn approx_eq(&self, a: &Ain, b: &Ain) -> bool {
        a.approx_eq(b, self.tolerance)
    }
}
