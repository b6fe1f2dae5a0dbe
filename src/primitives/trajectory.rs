//! Trajectory container for descent runs.
//!
//! ## Purpose
//!
//! This module defines the value returned by every descent run: the ordered
//! sequence of visited positions, the cost at each one when a cost function
//! was available, and run metadata (update count, convergence flag).
//!
//! ## Design notes
//!
//! * **Storage**: Positions are stored flattened in row-major order
//!   (`len * dimensions` scalars), the same nD layout used for input data
//!   elsewhere in the crate. Costs are a parallel optional array.
//! * **Views**: `TrajectoryPoint` borrows into the container, so iterating
//!   a trajectory allocates nothing.
//! * **Immutability**: A trajectory is never modified after construction.
//!
//! ## Invariants
//!
//! * A trajectory holds at least one point (the start position).
//! * `positions.len() == len() * dimensions`.
//! * When costs are present, `costs.len() == len()`.
//! * `updates() == len() - 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// ============================================================================
// Trajectory Point View
// ============================================================================

/// One visited point of a descent run: its position and, when a cost
/// function was supplied, the cost at that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint<'a, T> {
    /// Zero-based iteration index; the start position has index 0.
    pub iteration: usize,
    /// Position visited at this iteration.
    pub position: &'a [T],
    /// Cost at this position, if a cost function was available.
    pub cost: Option<T>,
}

// ============================================================================
// Trajectory
// ============================================================================

/// The ordered sequence of points visited by a descent run.
///
/// Produced by the batch adapter; the stepwise adapter yields the same
/// points one at a time instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T> {
    /// Flattened positions, row-major: point `i` occupies
    /// `[i * dimensions, (i + 1) * dimensions)`.
    positions: Vec<T>,

    /// Cost at each visited position, parallel to the points.
    costs: Option<Vec<T>>,

    /// Number of components per position.
    dimensions: usize,

    /// Whether the stopping rule was satisfied (possibly exactly at the
    /// iteration cap).
    converged: bool,
}

impl<T: Float> Trajectory<T> {
    /// Assemble a trajectory from executor output.
    pub(crate) fn from_parts(positions: Vec<T>, costs: Option<Vec<T>>, dimensions: usize, converged: bool) -> Self {
        debug_assert!(dimensions > 0);
        debug_assert!(positions.len() >= dimensions);
        debug_assert_eq!(positions.len() % dimensions, 0);
        if let Some(c) = &costs {
            debug_assert_eq!(c.len() * dimensions, positions.len());
        }
        Self {
            positions,
            costs,
            dimensions,
            converged,
        }
    }

    /// Number of points in the trajectory, including the start position.
    pub fn len(&self) -> usize {
        self.positions.len() / self.dimensions
    }

    /// Always `false`: the start position is always recorded.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of components per position.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of update steps performed.
    pub fn updates(&self) -> usize {
        self.len() - 1
    }

    /// Whether the stopping rule was satisfied.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Position of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn position(&self, i: usize) -> &[T] {
        let offset = i * self.dimensions;
        &self.positions[offset..offset + self.dimensions]
    }

    /// Cost at point `i`, if costs were recorded.
    ///
    /// # Panics
    ///
    /// Panics if costs were recorded and `i >= len()`.
    pub fn cost(&self, i: usize) -> Option<T> {
        self.costs.as_ref().map(|c| c[i])
    }

    /// All positions, flattened row-major.
    pub fn positions(&self) -> &[T] {
        &self.positions
    }

    /// All recorded costs, parallel to the points.
    pub fn costs(&self) -> Option<&[T]> {
        self.costs.as_deref()
    }

    /// The start position (first point).
    pub fn initial(&self) -> TrajectoryPoint<'_, T> {
        self.point(0)
    }

    /// The last visited point: either a converged point or the point
    /// reached at the iteration cap.
    pub fn final_point(&self) -> TrajectoryPoint<'_, T> {
        self.point(self.len() - 1)
    }

    /// Position of the last visited point.
    pub fn final_position(&self) -> &[T] {
        self.position(self.len() - 1)
    }

    /// Point `i` as a borrowed view.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn point(&self, i: usize) -> TrajectoryPoint<'_, T> {
        TrajectoryPoint {
            iteration: i,
            position: self.position(i),
            cost: self.cost(i),
        }
    }

    /// Iterate over all visited points in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = TrajectoryPoint<'_, T>> {
        (0..self.len()).map(move |i| self.point(i))
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float> fmt::Display for Trajectory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Dimensions: {}", self.dimensions)?;
        writeln!(f, "  Updates: {}", self.updates())?;
        writeln!(
            f,
            "  Converged: {}",
            if self.converged { "yes" } else { "no" }
        )?;
        writeln!(f)?;

        writeln!(f, "Trajectory:")?;
        write!(f, "   Iter")?;
        for d in 0..self.dimensions {
            write!(f, "   Position[{}]", d)?;
        }
        if self.costs.is_some() {
            write!(f, "         Cost")?;
        }
        writeln!(f)?;

        let width = 7 + 14 * self.dimensions + if self.costs.is_some() { 13 } else { 0 };
        for _ in 0..width {
            write!(f, "-")?;
        }
        writeln!(f)?;

        for point in self.points() {
            write!(f, "  {:>5}", point.iteration)?;
            for &component in point.position {
                write!(f, "  {:>12.6}", component.to_f64().unwrap_or(f64::NAN))?;
            }
            if let Some(cost) = point.cost {
                write!(f, "  {:>11.6}", cost.to_f64().unwrap_or(f64::NAN))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
