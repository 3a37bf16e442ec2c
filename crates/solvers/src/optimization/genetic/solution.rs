use refit_core::Snapshot;

use super::GenerationStats;

/// Indicates how the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran every configured generation.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a genetic search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best individual seen across all generations.
    pub x: [f64; N],

    /// Objective at `x`, or `None` if no individual was ever valid.
    pub objective: Option<f64>,

    /// Snapshot at `x`, or `None` if no individual was ever valid.
    pub snapshot: Option<Snapshot<I, O>>,

    /// Generation in which the search ended (0 is the initial population).
    pub generation: usize,

    /// Total number of evaluations performed.
    pub evaluations: usize,

    /// One entry per fully evaluated generation, in order.
    pub history: Vec<GenerationStats>,
}
