//! Core traits and types for fitting model parameters.
//!
//! This crate defines the shared abstractions that solvers and models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OptimizationProblem`]: adapts solver variables to model inputs and
//!   extracts an objective from model outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::OptimizationProblem;
pub use {model::Model, model::Snapshot};
