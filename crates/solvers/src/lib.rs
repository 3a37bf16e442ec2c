//! Numerical solvers for refit problems.
//!
//! Solvers are generic over a [`Model`] and a problem trait from `refit-core`.
//! They report progress through an [`Observer`], which can log, collect, or
//! steer the search without changing the solver's API.
//!
//! [`Model`]: refit_core::Model
//! [`Observer`]: refit_core::Observer

pub mod optimization;
