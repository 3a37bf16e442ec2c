//! Genetic search for bounded multi-variable optimization.
//!
//! # Algorithm
//!
//! The solver keeps a fixed-size population of candidate points `x: [f64; N]`.
//! Generation 0 samples every coordinate uniformly from its [`Bounds`]. Each
//! following generation is bred from the previous one:
//!
//! 1. The best individual is copied over unchanged when elitism is enabled.
//! 2. Parents are picked by tournament selection: a few individuals are drawn
//!    at random (with replacement) and the best of them wins.
//! 3. With the crossover probability, two parents exchange the coordinates
//!    after a random cut point (one-point crossover). Otherwise the children
//!    are copies of their parents.
//! 4. With the mutation probability, a child has one random coordinate
//!    replaced by a fresh sample from that coordinate's bounds.
//!
//! The whole generation is evaluated before the next one is bred. The search
//! runs for exactly [`Config::generations`] generations after the initial one
//! and reports the best individual seen across all of them.
//!
//! # When to Use
//!
//! Genetic search is appropriate when:
//! - The objective is undefined over parts of the domain (failed evaluations
//!   simply rank last)
//! - Derivatives are unavailable and the objective may have several optima
//! - A reproducible, seedable search is needed (the RNG is passed in)
//!
//! # Failures
//!
//! A model error, a problem error, or a NaN objective never aborts the search.
//! The individual is kept in the population with no objective, which ranks
//! below every valid individual.
//!
//! # Observer Events
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::ModelFailed`]: model returned an error
//! - [`Event::ProblemFailed`]: problem returned an error (input or objective)
//! - [`Event::NotANumber`]: the objective was NaN
//! - [`Event::GenerationCompleted`]: every individual of a generation has
//!   been evaluated
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat an evaluated individual as invalid.

mod action;
mod bounds;
mod config;
mod event;
mod individual;
mod operators;
mod population;
mod search;
mod solution;
mod state;
mod stats;


pub use action::Action;
pub use bounds::{Bounds, BoundsError};
pub use config::{Config, ConfigError};
pub use event::Event;
pub use individual::Individual;
pub use solution::{Solution, Status};
pub use stats::GenerationStats;

use rand::Rng;
use refit_core::{Model, Observer, OptimizationProblem};

use search::search;

/// Finds the minimum of the objective using genetic search.
///
/// The observer receives an [`Event`] for each evaluation and one per
/// completed generation.
/// See the [module docs](self) for details on failures and observer actions.
pub fn minimize<M, P, R, Obs, const N: usize>(
    model: &M,
    problem: &P,
    bounds: [Bounds; N],
    config: &Config,
    rng: &mut R,
    observer: Obs,
) -> Solution<M::Input, M::Output, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng + ?Sized,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, &bounds, config, rng, observer, |v| v)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
pub fn minimize_unobserved<M, P, R, const N: usize>(
    model: &M,
    problem: &P,
    bounds: [Bounds; N],
    config: &Config,
    rng: &mut R,
) -> Solution<M::Input, M::Output, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng + ?Sized,
{
    minimize(model, problem, bounds, config, rng, ())
}

/// Finds the maximum of the objective using genetic search.
///
/// The observer receives an [`Event`] for each evaluation and one per
/// completed generation.
/// See the [module docs](self) for details on failures and observer actions.
pub fn maximize<M, P, R, Obs, const N: usize>(
    model: &M,
    problem: &P,
    bounds: [Bounds; N],
    config: &Config,
    rng: &mut R,
    observer: Obs,
) -> Solution<M::Input, M::Output, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng + ?Sized,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, &bounds, config, rng, observer, |v| -v)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
pub fn maximize_unobserved<M, P, R, const N: usize>(
    model: &M,
    problem: &P,
    bounds: [Bounds; N],
    config: &Config,
    rng: &mut R,
) -> Solution<M::Input, M::Output, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng + ?Sized,
{
    maximize(model, problem, bounds, config, rng, ())
}
