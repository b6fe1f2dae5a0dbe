//! Pure mathematical functions.
//!
//! Contains vector norms and the in-place descent update, plus the
//! nalgebra-backed normal-equations solve used by the least-squares
//! reference minimizer. Nothing in this layer allocates per iteration or
//! touches configuration types.

pub mod linalg;
pub mod vector;
