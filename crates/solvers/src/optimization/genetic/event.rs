use refit_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::EvalError;

use super::{Action, GenerationStats, Individual};

/// Events emitted by the genetic solver.
///
/// Evaluation events carry `best`, the best individual seen so far in the
/// whole search (not just the current generation). Before any valid
/// evaluation, `best` is an invalid placeholder.
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of an individual.
    Evaluated {
        /// Generation the individual belongs to (0 is the initial population).
        generation: usize,

        /// The evaluated individual.
        x: [f64; N],

        /// The objective at `x`.
        objective: f64,

        /// The model input at `x`.
        input: &'a M::Input,

        /// The model output at `x`.
        output: &'a M::Output,

        /// The best individual seen before this evaluation.
        best: Individual<N>,
    },

    /// Model evaluation failed.
    ModelFailed {
        generation: usize,
        x: [f64; N],
        best: Individual<N>,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        generation: usize,
        x: [f64; N],
        best: Individual<N>,

        /// The problem error.
        error: &'a P::Error,
    },

    /// The objective evaluated to NaN.
    NotANumber {
        generation: usize,
        x: [f64; N],
        best: Individual<N>,
    },

    /// Every individual of a generation has been evaluated.
    GenerationCompleted {
        /// Summary of the generation, including the best objective so far.
        stats: &'a GenerationStats,

        /// The best individual seen so far.
        best: Individual<N>,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the generation this event belongs to.
    #[must_use]
    pub fn generation(&self) -> usize {
        match self {
            Self::Evaluated { generation, .. }
            | Self::ModelFailed { generation, .. }
            | Self::ProblemFailed { generation, .. }
            | Self::NotANumber { generation, .. } => *generation,
            Self::GenerationCompleted { stats, .. } => stats.generation,
        }
    }

    /// Returns the evaluated (or attempted) point, if this is an evaluation event.
    #[must_use]
    pub fn x(&self) -> Option<[f64; N]> {
        match self {
            Self::Evaluated { x, .. }
            | Self::ModelFailed { x, .. }
            | Self::ProblemFailed { x, .. }
            | Self::NotANumber { x, .. } => Some(*x),
            Self::GenerationCompleted { .. } => None,
        }
    }

    /// Returns the objective of a successful evaluation.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Evaluated { objective, .. } => Some(*objective),
            _ => None,
        }
    }

    /// Returns the best individual seen so far.
    #[must_use]
    pub fn best(&self) -> Individual<N> {
        match self {
            Self::Evaluated { best, .. }
            | Self::ModelFailed { best, .. }
            | Self::ProblemFailed { best, .. }
            | Self::NotANumber { best, .. }
            | Self::GenerationCompleted { best, .. } => *best,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        generation: usize,
        x: [f64; N],
        best: Individual<N>,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => observer.observe(&Event::ModelFailed {
                generation,
                x,
                best,
                error: e,
            }),
            EvalError::Problem(e) => observer.observe(&Event::ProblemFailed {
                generation,
                x,
                best,
                error: e,
            }),
            EvalError::NotANumber => observer.observe(&Event::NotANumber {
                generation,
                x,
                best,
            }),
        }
    }
}
