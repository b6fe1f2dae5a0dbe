//! Error types for descent configuration and input validation.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! entry point in the crate. All variants describe caller errors caught
//! before the iteration starts; the iteration itself never fails.
//!
//! ## Design notes
//!
//! * **Exhaustive**: One variant per distinct caller mistake, with the
//!   offending value embedded for diagnostics.
//! * **Comparable**: `Clone + PartialEq` so tests can assert on exact errors.
//! * **Displayable**: Stable, human-readable messages; `std::error::Error`
//!   under the `std` feature.
//!
//! ## Key concepts
//!
//! * **Caller errors only**: Divergence, oscillation, and non-convergence
//!   are valid numeric outcomes and deliberately have no variant here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised while configuring or starting a descent run.
#[derive(Debug, Clone, PartialEq)]
pub enum DescentError {
    /// The start position has no components.
    EmptyStart,

    /// The step size is non-positive, NaN, or infinite.
    InvalidStepSize(f64),

    /// The iteration cap is zero.
    InvalidMaxIterations(usize),

    /// The convergence radius is negative, NaN, or infinite.
    InvalidRadius(f64),

    /// A supplied scalar or vector component is NaN or infinite.
    InvalidNumericValue(String),

    /// Paired data arrays have incompatible lengths.
    MismatchedInputs {
        /// Length of the predictor array.
        x_len: usize,
        /// Length of the response array.
        y_len: usize,
    },

    /// The start position's dimensionality disagrees with the objective
    /// or the stop-condition target.
    MismatchedDimensions {
        /// Dimensionality the objective or target expects.
        expected: usize,
        /// Dimensionality actually supplied.
        got: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for DescentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStart => write!(f, "Start position is empty"),
            Self::InvalidStepSize(v) => {
                write!(f, "Invalid step_size: {} (must be > 0 and finite)", v)
            }
            Self::InvalidMaxIterations(v) => {
                write!(f, "Invalid max_iterations: {} (must be at least 1)", v)
            }
            Self::InvalidRadius(v) => {
                write!(
                    f,
                    "Invalid convergence_radius: {} (must be >= 0 and finite)",
                    v
                )
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::MismatchedDimensions { expected, got } => {
                write!(
                    f,
                    "Dimension mismatch: expected {} components, got {}",
                    expected, got
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DescentError {}
