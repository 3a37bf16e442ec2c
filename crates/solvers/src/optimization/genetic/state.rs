use refit_core::Snapshot;

use super::{GenerationStats, Individual, Solution, solution::Status};

/// Bookkeeping that outlives any single generation.
pub(super) struct State<I, O, const N: usize> {
    best: Individual<N>,
    best_snapshot: Option<Snapshot<I, O>>,
    evaluations: usize,
    history: Vec<GenerationStats>,
}

impl<I, O, const N: usize> State<I, O, N> {
    /// Starts from a placeholder best that any valid individual replaces.
    pub(super) fn new(placeholder: [f64; N]) -> Self {
        Self {
            best: Individual::invalid(placeholder),
            best_snapshot: None,
            evaluations: 0,
            history: Vec::new(),
        }
    }

    pub(super) fn best(&self) -> Individual<N> {
        self.best
    }

    pub(super) fn best_objective(&self) -> Option<f64> {
        self.best.objective
    }

    /// Counts an evaluation and keeps it if it beats the best so far.
    pub(super) fn record<F: Fn(f64) -> f64>(
        &mut self,
        individual: Individual<N>,
        snapshot: Option<Snapshot<I, O>>,
        transform: &F,
    ) {
        self.evaluations += 1;
        if individual.beats(&self.best, transform) {
            self.best = individual;
            self.best_snapshot = snapshot;
        }
    }

    pub(super) fn push_stats(&mut self, stats: GenerationStats) {
        self.history.push(stats);
    }

    pub(super) fn into_solution(self, status: Status, generation: usize) -> Solution<I, O, N> {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            snapshot: self.best_snapshot,
            generation,
            evaluations: self.evaluations,
            history: self.history,
        }
    }
}
