//! Batch adapter for complete descent runs.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: configure once, then
//! run the whole bounded loop in a single call and receive the complete
//! trajectory. This is the right mode when the consumer wants the full path
//! up front — plotting a descent curve, precomputing animation keyframes,
//! or checking convergence in a test.
//!
//! ## Design notes
//!
//! * **Processing**: Runs the entire iteration in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built model borrows per run, so one configuration can
//!   descend many objectives and start positions.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The start position must be non-empty, finite, and dimensioned to match
//!   the objective (and the stop-condition target, when one is set).
//! * The returned trajectory always begins with the start position.
//!
//! ## Non-goals
//!
//! * This adapter does not yield points incrementally (use the stepwise
//!   adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::algorithms::stopping::StopCondition;
use crate::engine::executor::{DescentConfig, DescentExecutor};
use crate::engine::validator::Validator;
use crate::primitives::errors::DescentError;
use crate::primitives::trajectory::Trajectory;

// ============================================================================
// Batch Descent Builder
// ============================================================================

/// Builder for the batch descent model.
#[derive(Debug, Clone)]
pub struct BatchDescentBuilder<T> {
    /// Constant learning rate.
    pub step_size: T,

    /// Upper bound on update steps.
    pub max_iterations: usize,

    /// Early-stopping rule.
    pub stop_condition: StopCondition<T>,

    /// Whether objective runs evaluate the cost at every visited position.
    pub record_costs: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchDescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchDescentBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            step_size: T::from(0.1).unwrap(),
            max_iterations: 100,
            stop_condition: StopCondition::default(),
            record_costs: true,
            duplicate_param: None,
        }
    }

    /// Set the constant step size (learning rate).
    pub fn step_size(mut self, step_size: T) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the upper bound on update steps.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Stop early once the position norm drops below `radius`.
    pub fn convergence_radius(mut self, radius: T) -> Self {
        self.stop_condition = StopCondition::NearOrigin(radius);
        self
    }

    /// Set a general early-stopping rule.
    pub fn stop_condition(mut self, condition: StopCondition<T>) -> Self {
        self.stop_condition = condition;
        self
    }

    /// Enable or disable cost recording for objective runs.
    pub fn record_costs(mut self, enabled: bool) -> Self {
        self.record_costs = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch model, validating every configured parameter.
    pub fn build(self) -> Result<BatchDescent<T>, DescentError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate step size
        Validator::validate_step_size(self.step_size)?;

        // Validate iteration cap
        Validator::validate_max_iterations(self.max_iterations)?;

        // Validate the stopping rule's own parameters
        Validator::validate_stop_condition(&self.stop_condition)?;

        Ok(BatchDescent { config: self })
    }
}

// ============================================================================
// Batch Descent Model
// ============================================================================

/// Batch descent model: runs the full bounded loop per call.
#[derive(Debug, Clone)]
pub struct BatchDescent<T> {
    config: BatchDescentBuilder<T>,
}

impl<T: Float> BatchDescent<T> {
    /// Descend `objective` from `start`, returning the full trajectory with
    /// a cost recorded at every visited position.
    pub fn minimize<O>(&self, objective: &O, start: &[T]) -> Result<Trajectory<T>, DescentError>
    where
        O: Objective<T>,
    {
        Validator::validate_start(start, Some(objective.dimensions()))?;
        if let Some(expected) = self.config.stop_condition.expected_dimensions() {
            if start.len() != expected {
                return Err(DescentError::MismatchedDimensions {
                    expected,
                    got: start.len(),
                });
            }
        }

        Ok(DescentExecutor::run_objective(
            &self.descent_config(),
            objective,
            start,
        ))
    }

    /// Descend using a gradient function alone, returning a trajectory of
    /// positions without costs.
    ///
    /// `gradient_fn` writes the gradient at the given position into the
    /// provided buffer; the caller guarantees it is defined wherever the
    /// iteration visits.
    pub fn minimize_with_gradient<G>(
        &self,
        gradient_fn: G,
        start: &[T],
    ) -> Result<Trajectory<T>, DescentError>
    where
        G: FnMut(&[T], &mut [T]),
    {
        Validator::validate_start(start, self.config.stop_condition.expected_dimensions())?;

        Ok(DescentExecutor::run_gradient(
            &self.descent_config(),
            gradient_fn,
            start,
        ))
    }

    fn descent_config(&self) -> DescentConfig<T> {
        DescentConfig {
            step_size: self.config.step_size,
            max_iterations: self.config.max_iterations,
            stop: self.config.stop_condition.clone(),
            record_costs: self.config.record_costs,
        }
    }
}
