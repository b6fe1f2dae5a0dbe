//! Early-stopping policies for descent runs.
//!
//! ## Purpose
//!
//! This module defines the rule that may halt the iteration before the
//! iteration cap. The rule is evaluated over the full per-iteration context
//! — position, gradient, and iteration index — so no particular minimum
//! location is baked into the engine.
//!
//! ## Design notes
//!
//! * **Policy enum**: One variant per stopping rule, evaluated through a
//!   single `is_met` method.
//! * **Origin shorthand**: `NearOrigin` mirrors the common classroom setup
//!   where the cost function's minimum sits at the origin; `NearPoint`
//!   generalizes it to an arbitrary target.
//! * **Custom rules**: The `Custom` variant holds a plain `fn` pointer so
//!   the configuration stays `Clone`, `Copy`-free and `Debug`-printable.
//!
//! ## Key concepts
//!
//! * **Pre-update evaluation**: The engine checks the rule *before* each
//!   update, so a start position that already satisfies it produces a
//!   single-point trajectory.
//!
//! ## Non-goals
//!
//! * This module does not bound the iteration count; the cap lives in the
//!   engine configuration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::vector;

/// Caller-supplied stopping predicate over (position, gradient, iteration).
pub type StopPredicateFn<T> = fn(&[T], &[T], usize) -> bool;

// ============================================================================
// Stop Condition Enum
// ============================================================================

/// Rule that may halt the iteration before the cap.
#[derive(Debug, Clone, PartialEq)]
pub enum StopCondition<T> {
    /// Never stop early; run until the iteration cap.
    Never,

    /// Stop once the Euclidean norm of the position drops below the radius.
    ///
    /// Only meaningful when the cost function's minimum sits at the origin;
    /// prefer [`StopCondition::NearPoint`] otherwise.
    NearOrigin(T),

    /// Stop once the position comes within `radius` of `target`.
    NearPoint {
        /// Point the iteration is expected to approach.
        target: Vec<T>,
        /// Euclidean distance below which the run counts as converged.
        radius: T,
    },

    /// Stop once the Euclidean norm of the gradient drops below the
    /// tolerance (a stationary point, wherever it sits).
    GradientNormBelow(T),

    /// Stop once the predicate returns `true` for
    /// `(position, gradient, iteration index)`.
    Custom(StopPredicateFn<T>),
}

impl<T> Default for StopCondition<T> {
    fn default() -> Self {
        Self::Never
    }
}

impl<T: Float> StopCondition<T> {
    /// Evaluate the rule at one iteration of the loop.
    pub fn is_met(&self, position: &[T], gradient: &[T], iteration: usize) -> bool {
        match self {
            Self::Never => false,
            Self::NearOrigin(radius) => vector::euclidean_norm(position) < *radius,
            Self::NearPoint { target, radius } => {
                vector::distance(position, target) < *radius
            }
            Self::GradientNormBelow(tolerance) => {
                vector::euclidean_norm(gradient) < *tolerance
            }
            Self::Custom(predicate) => predicate(position, gradient, iteration),
        }
    }

    /// Dimensionality the rule constrains positions to, if any.
    pub(crate) fn expected_dimensions(&self) -> Option<usize> {
        match self {
            Self::NearPoint { target, .. } => Some(target.len()),
            _ => None,
        }
    }
}
