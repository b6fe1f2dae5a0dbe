//! Stepwise adapter for incremental descent.
//!
//! ## Purpose
//!
//! This module provides the stepwise execution adapter: a session that
//! performs exactly one update per call. Animation drivers schedule one
//! timed visual transition per descent step, so they pull points one at a
//! time instead of receiving the whole trajectory up front.
//!
//! ## Design notes
//!
//! * **One update per call**: `advance()` performs a single update and
//!   yields the point it reached, or `None` once the session is finished.
//! * **State across calls**: The session owns the objective, the current
//!   position, and the pre-allocated workspace.
//! * **Parity**: A session visits exactly the same positions as a batch run
//!   with the same configuration; both check the stopping rule before each
//!   update.
//!
//! ## Invariants
//!
//! * `iteration()` equals the number of updates performed so far.
//! * After `advance()` returns `None` once, it returns `None` forever.
//! * `converged()` is only meaningful once `is_finished()` is true.
//!
//! ## Non-goals
//!
//! * This adapter does not accumulate the full trajectory (collect the
//!   yielded points, or use the batch adapter).
//! * This adapter does not support gradient-only descent; its consumers
//!   plot cost values every frame, so a full objective is required.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::algorithms::stopping::StopCondition;
use crate::engine::executor::DescentConfig;
use crate::engine::validator::Validator;
use crate::engine::workspace::DescentWorkspace;
use crate::math::vector;
use crate::primitives::errors::DescentError;
use crate::primitives::trajectory::TrajectoryPoint;

// ============================================================================
// Stepwise Descent Builder
// ============================================================================

/// Builder for the stepwise descent model.
#[derive(Debug, Clone)]
pub struct StepwiseDescentBuilder<T> {
    /// Constant learning rate.
    pub step_size: T,

    /// Upper bound on update steps.
    pub max_iterations: usize,

    /// Early-stopping rule.
    pub stop_condition: StopCondition<T>,

    /// Whether yielded points carry a cost value.
    pub record_costs: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for StepwiseDescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StepwiseDescentBuilder<T> {
    /// Create a new stepwise builder with default parameters.
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

    /// Enable or disable cost values on yielded points.
    pub fn record_costs(mut self, enabled: bool) -> Self {
        self.record_costs = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the stepwise model, validating every configured parameter.
    pub fn build(self) -> Result<StepwiseDescent<T>, DescentError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_step_size(self.step_size)?;
        Validator::validate_max_iterations(self.max_iterations)?;
        Validator::validate_stop_condition(&self.stop_condition)?;

        Ok(StepwiseDescent { config: self })
    }
}

// ============================================================================
// Stepwise Descent Model
// ============================================================================

/// Stepwise descent model: opens sessions that yield one point per call.
#[derive(Debug, Clone)]
pub struct StepwiseDescent<T> {
    config: StepwiseDescentBuilder<T>,
}

impl<T: Float> StepwiseDescent<T> {
    /// Open a session descending `objective` from `start`.
    ///
    /// The session takes ownership of the objective so it can be driven
    /// frame by frame without lifetime juggling in the caller.
    pub fn session<O>(&self, objective: O, start: &[T]) -> Result<DescentSession<T, O>, DescentError>
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

        Ok(DescentSession {
            config: DescentConfig {
                step_size: self.config.step_size,
                max_iterations: self.config.max_iterations,
                stop: self.config.stop_condition.clone(),
                record_costs: self.config.record_costs,
            },
            workspace: DescentWorkspace::new(start),
            objective,
            iteration: 0,
            finished: false,
            converged: false,
        })
    }
}

// ============================================================================
// Descent Session
// ============================================================================

/// An in-flight stepwise descent: one update per `advance()` call.
#[derive(Debug, Clone)]
pub struct DescentSession<T, O> {
    config: DescentConfig<T>,
    workspace: DescentWorkspace<T>,
    objective: O,
    iteration: usize,
    finished: bool,
    converged: bool,
}

impl<T: Float, O: Objective<T>> DescentSession<T, O> {
    /// Perform one update and yield the point it reached.
    ///
    /// Returns `None` when the session is finished: either the stopping
    /// rule held at the current position (before the update) or the
    /// iteration cap has been reached. The start position itself is not
    /// yielded; read it via [`DescentSession::position`] before the first
    /// call.
    pub fn advance(&mut self) -> Option<TrajectoryPoint<'_, T>> {
        if self.finished {
            return None;
        }

        self.objective
            .gradient_into(&self.workspace.position, &mut self.workspace.gradient);

        if self.config.stop.is_met(
            &self.workspace.position,
            &self.workspace.gradient,
            self.iteration,
        ) {
            self.finished = true;
            self.converged = true;
            return None;
        }

        vector::descent_step_into(
            &mut self.workspace.position,
            &self.workspace.gradient,
            self.config.step_size,
        );
        self.iteration += 1;

        if self.iteration == self.config.max_iterations {
            self.finished = true;
            // Same post-cap re-check as the batch executor.
            if !matches!(self.config.stop, StopCondition::Never) {
                self.objective
                    .gradient_into(&self.workspace.position, &mut self.workspace.gradient);
                self.converged = self.config.stop.is_met(
                    &self.workspace.position,
                    &self.workspace.gradient,
                    self.iteration,
                );
            }
        }

        let cost = self
            .config
            .record_costs
            .then(|| self.objective.value(&self.workspace.position));

        Some(TrajectoryPoint {
            iteration: self.iteration,
            position: &self.workspace.position,
            cost,
        })
    }

    /// Current position: the start before the first `advance()`, the most
    /// recently reached point afterwards.
    pub fn position(&self) -> &[T] {
        &self.workspace.position
    }

    /// Cost at the current position.
    pub fn cost(&self) -> T {
        self.objective.value(&self.workspace.position)
    }

    /// Number of updates performed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Whether the session has stopped yielding points.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the stopping rule was satisfied.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// The objective being descended.
    pub fn objective(&self) -> &O {
        &self.objective
    }
}
