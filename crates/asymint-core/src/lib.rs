//! Asymint Core
//!
//! Arithmetic engine for Asymmetric Interval Numbers (AINs): intervals
//! `[lower, upper]` that also carry an expected value `lower <= expected <= upper`.
//!
//! ## Key Concepts
//!
//! - **AIN**: Immutable `(lower, upper, expected)` triple, validated on construction
//! - **Spreads**: `expected - lower` (left) and `upper - expected` (right)
//! - **Asymmetry index**: `(right - left) / width`, in `[-1, 1]`
//! - **Closed arithmetic**: negation, addition, subtraction, scalar scaling,
//!   multiplication and division all return valid AINs or a typed error
//! - **Ranking**: deterministic tie-break order for sorting consumers
//!
//! ## Example
//!
//! ```
//! use asymint_core::Ain;
//!
//! let a = Ain::new(0.0, 10.0, 2.0)?;
//! let b = Ain::new(2.0, 8.0, 3.0)?;
//!
//! assert_eq!(a + b, Ain::new(2.0, 18.0, 5.0)?);
//! assert_eq!(a * b, Ain::new(0.0, 80.0, 6.0)?);
//! assert_eq!((a.divide(b)?).upper(), 5.0);
//! # Ok::<(), asymint_core::AinError>(())
//! ```
//!
//! ## Architecture
//!
//! - Pure value semantics: no operation mutates an operand, there is no
//!   shared state, and every type is `Send + Sync`
//! - Logging goes through `tracing`; installing a subscriber is left to the
//!   embedding application
//! - Plotting and reporting layers read values through [`IntervalView`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ain;
pub mod arithmetic;
pub mod config;
pub mod error;
pub mod ranking;
pub mod traits;

// Re-exports for convenience
pub use ain::Ain;
pub use config::AinConfig;
pub use error::{AinError, ConfigError};
pub use ranking::{ranked, sort_ranked, Ranked};
pub use traits::IntervalView;
