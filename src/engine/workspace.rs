//! Workspace for reusable descent buffers.
//!
//! This module provides a pre-allocated workspace so the update loop runs
//! without per-iteration allocation: one buffer for the gradient, one for
//! the current position.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

/// Pre-allocated buffers shared by the batch executor and stepwise sessions.
#[derive(Debug, Clone)]
pub struct DescentWorkspace<T> {
    /// Current position, updated in place each iteration.
    pub position: Vec<T>,
    /// Gradient at the current position, overwritten each iteration.
    pub gradient: Vec<T>,
}

impl<T: Float> DescentWorkspace<T> {
    /// Create a workspace seeded with the start position.
    pub fn new(start: &[T]) -> Self {
        Self {
            position: start.to_vec(),
            gradient: vec![T::zero(); start.len()],
        }
    }

    /// Number of components per position.
    pub fn dimensions(&self) -> usize {
        self.position.len()
    }
}
