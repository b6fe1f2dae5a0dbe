//! Descent building blocks.
//!
//! Contains the `Objective` trait with the built-in cost functions, and the
//! early-stopping policies evaluated between updates.

pub mod objective;
pub mod stopping;
