//! High-level API for descent configuration.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring descent parameters and choosing
//! an execution adapter (Batch or Stepwise).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated during adapter construction.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Stepwise modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DescentBuilder`] via `Descent::new()`.
//! 2. Chain configuration methods (`.step_size()`, `.max_iterations()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.
//! 4. Call `.build()` to validate and obtain the model.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchDescentBuilder;
use crate::adapters::stepper::StepwiseDescentBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchDescent;
pub use crate::adapters::stepper::{DescentSession, StepwiseDescent};
pub use crate::algorithms::objective::{LeastSquares, Objective, Quadratic, QuadraticSurface};
pub use crate::algorithms::stopping::{StopCondition, StopPredicateFn};
pub use crate::primitives::errors::DescentError;
pub use crate::primitives::trajectory::{Trajectory, TrajectoryPoint};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Stepwise};
}

// ============================================================================
// Descent Builder
// ============================================================================

/// Fluent builder for configuring descent parameters and execution modes.
#[derive(Debug, Clone)]
pub struct DescentBuilder<T> {
    /// Constant learning rate.
    pub step_size: Option<T>,

    /// Upper bound on update steps.
    pub max_iterations: Option<usize>,

    /// Distance-from-origin stopping radius.
    pub convergence_radius: Option<T>,

    /// General early-stopping rule.
    pub stop_condition: Option<StopCondition<T>>,

    /// Whether objective runs record a cost at every visited position.
    pub record_costs: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for DescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DescentBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            step_size: None,
            max_iterations: None,
            convergence_radius: None,
            stop_condition: None,
            record_costs: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: DescentAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the constant step size (learning rate).
    pub fn step_size(mut self, step_size: T) -> Self {
        if self.step_size.is_some() {
            self.duplicate_param = Some("step_size");
        }
        self.step_size = Some(step_size);
        self
    }

    /// Set the upper bound on update steps.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Stop early once the position norm drops below `radius`.
    ///
    /// Shorthand for `stop_condition(NearOrigin(radius))`; only meaningful
    /// when the cost function's minimum sits at the origin.
    pub fn convergence_radius(mut self, radius: T) -> Self {
        if self.convergence_radius.is_some() || self.stop_condition.is_some() {
            self.duplicate_param = Some("convergence_radius");
        }
        self.convergence_radius = Some(radius);
        self
    }

    /// Set a general early-stopping rule.
    pub fn stop_condition(mut self, condition: StopCondition<T>) -> Self {
        if self.stop_condition.is_some() || self.convergence_radius.is_some() {
            self.duplicate_param = Some("stop_condition");
        }
        self.stop_condition = Some(condition);
        self
    }

    /// Enable or disable cost recording for objective runs.
    pub fn record_costs(mut self, enabled: bool) -> Self {
        if self.record_costs.is_some() {
            self.duplicate_param = Some("record_costs");
        }
        self.record_costs = Some(enabled);
        self
    }
}

// ============================================================================
// Adapter Transition
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait DescentAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`DescentBuilder`] into a specialized execution builder.
    fn convert(builder: DescentBuilder<T>) -> Self::Output;
}

/// Marker for complete single-call runs.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> DescentAdapter<T> for Batch {
    type Output = BatchDescentBuilder<T>;

    fn convert(builder: DescentBuilder<T>) -> Self::Output {
        let mut result = BatchDescentBuilder::default();

        if let Some(step_size) = builder.step_size {
            result = result.step_size(step_size);
        }
        if let Some(max_iterations) = builder.max_iterations {
            result = result.max_iterations(max_iterations);
        }
        if let Some(radius) = builder.convergence_radius {
            result = result.convergence_radius(radius);
        }
        if let Some(condition) = builder.stop_condition {
            result = result.stop_condition(condition);
        }
        if let Some(record) = builder.record_costs {
            result = result.record_costs(record);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental frame-by-frame runs.
#[derive(Debug, Clone, Copy)]
pub struct Stepwise;

impl<T: Float> DescentAdapter<T> for Stepwise {
    type Output = StepwiseDescentBuilder<T>;

    fn convert(builder: DescentBuilder<T>) -> Self::Output {
        let mut result = StepwiseDescentBuilder::default();

        if let Some(step_size) = builder.step_size {
            result = result.step_size(step_size);
        }
        if let Some(max_iterations) = builder.max_iterations {
            result = result.max_iterations(max_iterations);
        }
        if let Some(radius) = builder.convergence_radius {
            result = result.convergence_radius(radius);
        }
        if let Some(condition) = builder.stop_condition {
            result = result.stop_condition(condition);
        }
        if let Some(record) = builder.record_costs {
            result = result.record_costs(record);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
