//! Solvers for optimization problems, which minimize or maximize an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective.
//!
//! # Solvers
//!
//! - [`genetic`]: derivative-free, population-based search over a bounded
//!   box, for objectives with undefined regions or several local optima
//!
//! [`OptimizationProblem`]: refit_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod genetic;
