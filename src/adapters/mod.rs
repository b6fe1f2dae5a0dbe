//! Execution mode adapters.
//!
//! Contains the batch adapter (full trajectory in one call) and the
//! stepwise adapter (one update per call, for frame-by-frame animation
//! drivers).

pub mod batch;
pub mod stepper;
