//! Core descent loop and trajectory assembly.
//!
//! ## Purpose
//!
//! This module runs the bounded gradient-descent iteration and assembles
//! the resulting trajectory. Both execution adapters funnel into the loop
//! defined here, so batch runs and stepwise sessions visit identical
//! position sequences.
//!
//! ## Design notes
//!
//! * **Pre-update stop check**: The stopping rule is evaluated before each
//!   update, over (position, gradient, iteration index). A start position
//!   that already satisfies it yields a single-point trajectory.
//! * **Post-cap re-check**: When the cap is exhausted without an early
//!   stop, the rule is evaluated once more at the final point so the
//!   `converged` flag is accurate when the cap lands exactly on target.
//! * **Total**: Once validation has passed, the loop cannot fail. NaNs and
//!   infinities propagate through positions like any other value.
//! * **Allocation**: One growable trajectory buffer plus the fixed-size
//!   workspace; nothing else is allocated.
//!
//! ## Invariants
//!
//! * The trajectory's first point is the start position.
//! * Each subsequent position equals the previous position minus
//!   `step_size * gradient(previous position)`.
//! * At most `max_iterations` updates are performed.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters; see `engine::validator`.
//! * This module implements plain fixed-rate descent only: no line search,
//!   no momentum, no step-size schedule.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::algorithms::stopping::StopCondition;
use crate::engine::workspace::DescentWorkspace;
use crate::math::vector;
use crate::primitives::trajectory::Trajectory;

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration handed to the executor by an adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentConfig<T> {
    /// Constant learning rate applied at every update.
    pub step_size: T,

    /// Upper bound on the number of update steps.
    pub max_iterations: usize,

    /// Early-stopping rule, evaluated before each update.
    pub stop: StopCondition<T>,

    /// Whether to evaluate the cost at every visited position (objective
    /// runs only; gradient-only runs never record costs).
    pub record_costs: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the bounded descent loop for the execution adapters.
pub struct DescentExecutor;

impl DescentExecutor {
    /// Descend an objective, recording costs when configured to.
    pub fn run_objective<T, O>(
        config: &DescentConfig<T>,
        objective: &O,
        start: &[T],
    ) -> Trajectory<T>
    where
        T: Float,
        O: Objective<T>,
    {
        let mut gradient_fn = |x: &[T], g: &mut [T]| objective.gradient_into(x, g);
        if config.record_costs {
            Self::run_loop(config, start, &mut gradient_fn, Some(|x: &[T]| objective.value(x)))
        } else {
            Self::run_loop::<T, _, fn(&[T]) -> T>(config, start, &mut gradient_fn, None)
        }
    }

    /// Descend using a gradient function alone; the trajectory records
    /// positions only.
    pub fn run_gradient<T, G>(
        config: &DescentConfig<T>,
        mut gradient_fn: G,
        start: &[T],
    ) -> Trajectory<T>
    where
        T: Float,
        G: FnMut(&[T], &mut [T]),
    {
        Self::run_loop::<T, _, fn(&[T]) -> T>(config, start, &mut gradient_fn, None)
    }

    // ========================================================================
    // Core Loop
    // ========================================================================

    fn run_loop<T, G, C>(
        config: &DescentConfig<T>,
        start: &[T],
        gradient_fn: &mut G,
        mut cost_fn: Option<C>,
    ) -> Trajectory<T>
    where
        T: Float,
        G: FnMut(&[T], &mut [T]),
        C: FnMut(&[T]) -> T,
    {
        let dimensions = start.len();
        let mut workspace = DescentWorkspace::new(start);

        let mut positions = Vec::with_capacity((config.max_iterations + 1) * dimensions);
        positions.extend_from_slice(start);

        let mut costs = cost_fn.as_mut().map(|cost| {
            let mut recorded = Vec::with_capacity(config.max_iterations + 1);
            recorded.push(cost(start));
            recorded
        });

        let mut converged = false;
        for iteration in 0..config.max_iterations {
            gradient_fn(&workspace.position, &mut workspace.gradient);

            if config
                .stop
                .is_met(&workspace.position, &workspace.gradient, iteration)
            {
                converged = true;
                break;
            }

            vector::descent_step_into(
                &mut workspace.position,
                &workspace.gradient,
                config.step_size,
            );

            positions.extend_from_slice(&workspace.position);
            if let (Some(recorded), Some(cost)) = (costs.as_mut(), cost_fn.as_mut()) {
                recorded.push(cost(&workspace.position));
            }
        }

        // The cap may land exactly on the target; re-check so `converged`
        // reflects the final point. `Never` cannot be met, skip the extra
        // gradient evaluation.
        if !converged && !matches!(config.stop, StopCondition::Never) {
            gradient_fn(&workspace.position, &mut workspace.gradient);
            converged = config.stop.is_met(
                &workspace.position,
                &workspace.gradient,
                config.max_iterations,
            );
        }

        Trajectory::from_parts(positions, costs, dimensions, converged)
    }
}
