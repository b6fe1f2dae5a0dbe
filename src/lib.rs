//! # descent — Gradient Descent Trajectory Generation for Rust
//!
//! A small, focused implementation of fixed-rate gradient descent that
//! records the *entire* path of the iteration, built for callers that need
//! every intermediate point rather than only the final answer: plotting
//! layers, scripted animations, and teaching material.
//!
//! ## What is a descent trajectory?
//!
//! Gradient descent minimizes a differentiable cost function by repeatedly
//! stepping against its gradient:
//!
//! ```text
//! x_{k+1} = x_k - step_size * ∇f(x_k)
//! ```
//!
//! Most optimization libraries return the final iterate and a convergence
//! flag. A *trajectory* generator instead returns the ordered sequence of
//! every visited position (and, when a cost function is available, the cost
//! at each one), so a renderer can draw the dot sliding down the curve, the
//! arrows between consecutive iterates, or the path snaking across a cost
//! surface.
//!
//! **Key properties:**
//! - The starting position is always the first trajectory point
//! - Deterministic: identical inputs produce bit-identical trajectories
//! - Divergence and oscillation are valid, representable outcomes, not errors
//! - Pure: no I/O, no global state, safe to call from independent threads
//!
//! ## Quick Start
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! // f(x) = 0.5 * x^2, gradient f'(x) = x, minimum at the origin
//! let cost = Quadratic::new(0.5, 0.0, 0.0);
//!
//! let model = Descent::new()
//!     .step_size(0.3)           // constant learning rate
//!     .max_iterations(8)        // upper bound on update steps
//!     .convergence_radius(0.1)  // stop once ||x|| < 0.1
//!     .adapter(Batch)
//!     .build()?;
//!
//! let trajectory = model.minimize(&cost, &[2.5])?;
//!
//! // First point is the start; second is 2.5 - 0.3 * 2.5 = 1.75.
//! assert_eq!(trajectory.position(0), &[2.5]);
//! assert_eq!(trajectory.position(1), &[1.75]);
//! println!("{}", trajectory);
//! # Result::<(), DescentError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Dimensions: 1
//!   Updates: 8
//!   Converged: no
//!
//! Trajectory:
//!    Iter     Position         Cost
//!   -----------------------------------
//!       0     2.500000     3.125000
//!       1     1.750000     1.531250
//!     ...
//! ```
//!
//! ### Gradient-only callers
//!
//! When only the gradient is available the trajectory records positions and
//! leaves costs unset:
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! let model = Descent::new()
//!     .step_size(0.4)
//!     .max_iterations(15)
//!     .convergence_radius(0.1)
//!     .adapter(Batch)
//!     .build()?;
//!
//! // ∇f(u, v) = (0.6u + 0.8v, v + 0.8u)
//! let trajectory = model.minimize_with_gradient(
//!     |x: &[f64], g: &mut [f64]| {
//!         g[0] = 0.6 * x[0] + 0.8 * x[1];
//!         g[1] = x[1] + 0.8 * x[0];
//!     },
//!     &[2.0, 2.0],
//! )?;
//!
//! assert!(trajectory.cost(0).is_none());
//! let step = trajectory.position(1); // (0.88, 0.56)
//! assert!((step[0] - 0.88).abs() < 1e-12 && (step[1] - 0.56).abs() < 1e-12);
//! # Result::<(), DescentError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Entry points return `Result<Trajectory<T>, DescentError>`. All errors are
//! caller errors caught up front — a non-positive step size, a zero iteration
//! cap, a malformed start position. Nothing that happens *during* the
//! iteration is an error: a divergent step size simply produces a trajectory
//! whose norm grows without bound.
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! let err = Descent::<f64>::new()
//!     .step_size(-0.1)
//!     .adapter(Batch)
//!     .build()
//!     .unwrap_err();
//! assert_eq!(err, DescentError::InvalidStepSize(-0.1));
//! ```
//!
//! ## Parameters
//!
//! | Parameter              | Default | Range          | Description                                   | Adapter |
//! |------------------------|---------|----------------|-----------------------------------------------|---------|
//! | **step_size**          | 0.1     | (0, ∞), finite | Constant learning rate applied every update   | All     |
//! | **max_iterations**     | 100     | [1, ∞)         | Upper bound on update steps performed         | All     |
//! | **convergence_radius** | None    | [0, ∞), finite | Stop once the position norm drops below this  | All     |
//! | **stop_condition**     | `Never` | see below      | General early-stopping rule                   | All     |
//! | **record_costs**       | true    | true/false     | Evaluate the cost at every visited position   | All     |
//!
//! ### Stop conditions
//!
//! `convergence_radius(r)` is shorthand for `stop_condition(NearOrigin(r))`,
//! matching cost functions whose minimum sits at the origin. The general
//! forms avoid baking in the minimum's location:
//!
//! | Condition                      | Stops when                                 |
//! |--------------------------------|--------------------------------------------|
//! | `Never`                        | Only at the iteration cap                  |
//! | `NearOrigin(r)`                | `‖position‖ < r`                           |
//! | `NearPoint { target, radius }` | `‖position - target‖ < radius`             |
//! | `GradientNormBelow(tol)`       | `‖gradient‖ < tol`                         |
//! | `Custom(predicate)`            | `predicate(position, gradient, iteration)` |
//!
//! The rule is evaluated *before* each update, so a start position that
//! already satisfies it yields a single-point trajectory.
//!
//! ## Execution Adapters
//!
//! | Adapter    | Use case                                  | Shape                                    |
//! |------------|-------------------------------------------|------------------------------------------|
//! | `Batch`    | Run the whole bounded loop at once        | `minimize(..) -> Trajectory`             |
//! | `Stepwise` | Drive one update per animation frame      | `session(..)` then `advance()` per frame |
//!
//! Both adapters visit exactly the same sequence of positions for the same
//! configuration.
//!
//! ```rust
//! use descent_rs::prelude::*;
//!
//! let cost = Quadratic::new(0.5, 0.0, 1.0);
//! let mut session = Descent::new()
//!     .step_size(0.3)
//!     .max_iterations(8)
//!     .convergence_radius(0.1)
//!     .adapter(Stepwise)
//!     .build()?
//!     .session(cost, &[2.5])?;
//!
//! while let Some(point) = session.advance() {
//!     // one timed visual transition per point
//!     let _ = (point.iteration, point.position, point.cost);
//! }
//! assert!(session.is_finished());
//! # Result::<(), DescentError>::Ok(())
//! ```
//!
//! ## Built-in cost functions
//!
//! The `Objective` trait takes any user type; three classroom staples ship
//! with the crate:
//!
//! - [`Quadratic`](prelude::Quadratic) — 1D parabola `a·x² + b·x + c`
//! - [`QuadraticSurface`](prelude::QuadraticSurface) — 2D bowl `a·u² + b·v² + c·uv + d`
//! - [`LeastSquares`](prelude::LeastSquares) — residual sum of squares of a
//!   fitted line `β₀ + β₁·x` over caller data, with the closed-form
//!   normal-equations minimizer for reference
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! descent_rs = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` positions and modest iteration caps to bound the single
//! trajectory allocation.
//!
//! ## References
//!
//! - Nocedal, J. & Wright, S. (2006). "Numerical Optimization", ch. 3
//! - Boyd, S. & Vandenberghe, L. (2004). "Convex Optimization", §9.3
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error taxonomy (`errors`) and the trajectory container
// returned by every entry point (`trajectory`).
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains vector norms and the in-place descent update (`vector`), and the
// nalgebra-backed normal-equations solve (`linalg`).
mod math;

// Layer 3: Algorithms - descent building blocks.
//
// Contains the `Objective` trait with the built-in cost functions, and the
// early-stopping policies (`StopCondition`).
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains parameter validation, the pre-allocated workspace, and the
// bounded descent loop that assembles the trajectory.
mod engine;

// Layer 5: Adapters - execution mode adapters.
//
// Contains the batch adapter (full trajectory in one call) and the stepwise
// adapter (one update per call, for frame-by-frame animation drivers).
mod adapters;

// High-level fluent API for descent configuration.
//
// Provides the `Descent` builder for configuring and running gradient
// descent.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard descent prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use descent_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Stepwise},
        DescentBuilder as Descent, DescentError, DescentSession, LeastSquares, Objective,
        Quadratic, QuadraticSurface,
        StopCondition::{self, Custom, GradientNormBelow, NearOrigin, NearPoint, Never},
        StopPredicateFn, Trajectory, TrajectoryPoint,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
