use std::ops::ControlFlow;

use rand::Rng;
use refit_core::{Model, Observer, OptimizationProblem, Snapshot};

use crate::optimization::evaluate::evaluate;

use super::{
    Action, Bounds, Config, Event, Individual, Solution, operators, population, solution::Status,
    state::State,
};

/// Core genetic search implementation.
///
/// The `transform` function is applied to objective values before ranking,
/// allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<M, P, R, Obs, F, const N: usize>(
    model: &M,
    problem: &P,
    bounds: &[Bounds; N],
    config: &Config,
    rng: &mut R,
    mut observer: Obs,
    transform: F,
) -> Solution<M::Input, M::Output, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    R: Rng + ?Sized,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    F: Fn(f64) -> f64,
{
    let initial: Vec<[f64; N]> = (0..config.population_size())
        .map(|_| operators::sample(bounds, &mut *rng))
        .collect();

    // Config guarantees a non-empty population.
    let mut state = State::new(initial[0]);

    let mut population = match evaluate_generation(
        model,
        problem,
        0,
        initial,
        &mut state,
        &mut observer,
        &transform,
    ) {
        ControlFlow::Continue(members) => members,
        ControlFlow::Break(()) => return state.into_solution(Status::StoppedByObserver, 0),
    };

    for generation in 1..=config.generations() {
        let points = operators::breed(&population, bounds, config, rng, &transform);

        population = match evaluate_generation(
            model,
            problem,
            generation,
            points,
            &mut state,
            &mut observer,
            &transform,
        ) {
            ControlFlow::Continue(members) => members,
            ControlFlow::Break(()) => {
                return state.into_solution(Status::StoppedByObserver, generation);
            }
        };
    }

    state.into_solution(Status::Completed, config.generations())
}

/// Evaluates every point of one generation, in order.
///
/// Breaks as soon as the observer asks to stop; the individual that triggered
/// the stop is still recorded.
fn evaluate_generation<M, P, Obs, F, const N: usize>(
    model: &M,
    problem: &P,
    generation: usize,
    points: Vec<[f64; N]>,
    state: &mut State<M::Input, M::Output, N>,
    observer: &mut Obs,
    transform: &F,
) -> ControlFlow<(), Vec<Individual<N>>>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    F: Fn(f64) -> f64,
{
    let mut members = Vec::with_capacity(points.len());

    for x in points {
        let assessed = eval_and_observe(model, problem, generation, x, state.best(), observer);
        state.record(assessed.individual, assessed.snapshot, transform);
        if assessed.stop {
            return ControlFlow::Break(());
        }
        members.push(assessed.individual);
    }

    let stats = population::stats(generation, &members, state.best_objective(), transform);
    let action = observer.observe(&Event::GenerationCompleted {
        stats: &stats,
        best: state.best(),
    });
    state.push_stats(stats);

    if action == Some(Action::StopEarly) {
        return ControlFlow::Break(());
    }
    ControlFlow::Continue(members)
}

// ============================================================================
// Eval + observe helper
// ============================================================================

struct Assessed<I, O, const N: usize> {
    individual: Individual<N>,
    snapshot: Option<Snapshot<I, O>>,
    stop: bool,
}

/// Evaluate at `x`, emit event, and handle observer action.
fn eval_and_observe<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    generation: usize,
    x: [f64; N],
    best: Individual<N>,
    observer: &mut Obs,
) -> Assessed<M::Input, M::Output, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    match evaluate(model, problem, x) {
        Ok(eval) => {
            let action = observer.observe(&Event::Evaluated {
                generation,
                x,
                objective: eval.objective,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                best,
            });
            match action {
                Some(Action::AssumeWorse) => Assessed {
                    individual: Individual::invalid(x),
                    snapshot: None,
                    stop: false,
                },
                _ => Assessed {
                    individual: Individual::valid(x, eval.objective),
                    snapshot: Some(eval.snapshot),
                    stop: action == Some(Action::StopEarly),
                },
            }
        }
        Err(error) => {
            let action = Event::<M, P, N>::emit_failure(generation, x, best, &error, observer);
            Assessed {
                individual: Individual::invalid(x),
                snapshot: None,
                stop: action == Some(Action::StopEarly),
            }
        }
    }
}
