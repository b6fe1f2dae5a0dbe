//! Input validation for descent configuration and start positions.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any descent
//! starts. It checks parameter bounds and start-position well-formedness so
//! the iteration itself can be total: once the loop begins, nothing fails.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like `step_size > 0`.
//! * **Finite Checks**: Ensures start components are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check where the gradient function is defined;
//!   callers guarantee it is defined wherever the iteration visits.
//! * This module does not detect divergent step sizes; divergence is a
//!   valid numeric outcome, not an error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::stopping::StopCondition;
use crate::primitives::errors::DescentError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for descent configuration and start positions.
///
/// Provides static methods for validating parameters and inputs. All
/// methods return `Result<(), DescentError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the constant step size (learning rate).
    pub fn validate_step_size<T: Float>(step_size: T) -> Result<(), DescentError> {
        if !step_size.is_finite() || step_size <= T::zero() {
            return Err(DescentError::InvalidStepSize(
                step_size.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), DescentError> {
        if max_iterations == 0 {
            return Err(DescentError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate a convergence radius (distance threshold).
    pub fn validate_radius<T: Float>(radius: T) -> Result<(), DescentError> {
        if !radius.is_finite() || radius < T::zero() {
            return Err(DescentError::InvalidRadius(
                radius.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a configured stop condition's own parameters.
    pub fn validate_stop_condition<T: Float>(
        condition: &StopCondition<T>,
    ) -> Result<(), DescentError> {
        match condition {
            StopCondition::Never | StopCondition::Custom(_) => Ok(()),
            StopCondition::NearOrigin(radius) => Self::validate_radius(*radius),
            StopCondition::NearPoint { target, radius } => {
                Self::validate_radius(*radius)?;
                for (i, &component) in target.iter().enumerate() {
                    if !component.is_finite() {
                        return Err(DescentError::InvalidNumericValue(format!(
                            "target[{}]={}",
                            i,
                            component.to_f64().unwrap_or(f64::NAN)
                        )));
                    }
                }
                Ok(())
            }
            StopCondition::GradientNormBelow(tolerance) => Self::validate_radius(*tolerance),
        }
    }

    // ========================================================================
    // Start Position Validation
    // ========================================================================

    /// Validate a start position: non-empty, finite components, and the
    /// dimensionality the objective or stop-condition target expects.
    pub fn validate_start<T: Float>(
        start: &[T],
        expected_dimensions: Option<usize>,
    ) -> Result<(), DescentError> {
        // Check 1: Non-empty position
        if start.is_empty() {
            return Err(DescentError::EmptyStart);
        }

        // Check 2: Dimensionality agreement
        if let Some(expected) = expected_dimensions {
            if start.len() != expected {
                return Err(DescentError::MismatchedDimensions {
                    expected,
                    got: start.len(),
                });
            }
        }

        // Check 3: All components finite
        for (i, &component) in start.iter().enumerate() {
            if !component.is_finite() {
                return Err(DescentError::InvalidNumericValue(format!(
                    "start[{}]={}",
                    i,
                    component.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DescentError> {
        if let Some(parameter) = duplicate_param {
            return Err(DescentError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
