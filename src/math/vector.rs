//! Vector arithmetic for descent updates.
//!
//! ## Purpose
//!
//! This module provides the handful of dense-vector operations the descent
//! loop needs: Euclidean norms, point-to-point distance, and the in-place
//! fixed-rate update itself.
//!
//! ## Design notes
//!
//! * **In-place**: The update writes through the position buffer; the loop
//!   performs no per-iteration allocation.
//! * **Generics**: All functions are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Norms and distances are always non-negative.
//! * `descent_step_into` leaves the position unchanged when the gradient is
//!   zero.
//!
//! ## Non-goals
//!
//! * This module does not evaluate gradients or stopping rules.

// External dependencies
use num_traits::Float;

// ============================================================================
// Norms and Distances
// ============================================================================

/// Compute the squared Euclidean norm of a vector.
#[inline]
pub fn squared_norm<T: Float>(v: &[T]) -> T {
    v.iter()
        .map(|&vi| vi * vi)
        .fold(T::zero(), |acc, x| acc + x)
}

/// Compute the Euclidean norm of a vector.
#[inline]
pub fn euclidean_norm<T: Float>(v: &[T]) -> T {
    squared_norm(v).sqrt()
}

/// Compute the Euclidean distance between two points.
#[inline]
pub fn distance<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x)
        .sqrt()
}

// ============================================================================
// Descent Update
// ============================================================================

/// Apply one fixed-rate descent update in place:
/// `position[d] -= step_size * gradient[d]` for every component.
#[inline]
pub fn descent_step_into<T: Float>(position: &mut [T], gradient: &[T], step_size: T) {
    debug_assert_eq!(position.len(), gradient.len());
    for (x, &g) in position.iter_mut().zip(gradient.iter()) {
        *x = *x - step_size * g;
    }
}
