//! Error types for AIN construction, arithmetic and configuration

use thiserror::Error;

/// Errors that can occur when building or combining AINs
///
/// Every variant is a precondition failure on caller input. None of them
/// is transient, so nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AinError {
    /// A scalar input (or an overflowed result) is NaN or infinite
    #[error("Non-finite value for {field}: {value}")]
    NonFiniteValue {
        /// Which input carried the value
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// Lower bound exceeds upper bound
    #[error("Invalid interval: lower {lower} is greater than upper {upper}")]
    InvalidInterval {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },

    /// Expected value lies outside `[lower, upper]`
    #[error("Expected value {expected} is outside [{lower}, {upper}]")]
    ExpectedOutOfRange {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
        /// Expected value
        expected: f64,
    },

    /// Divisor interval contains zero
    #[error("Division by an interval containing zero: [{lower}, {upper}]")]
    DivisionByZeroInterval {
        /// Divisor lower bound
        lower: f64,
        /// Divisor upper bound
        upper: f64,
    },
}

/// Errors that can occur while loading an [`AinConfig`](crate::AinConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// Values parsed but are out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
