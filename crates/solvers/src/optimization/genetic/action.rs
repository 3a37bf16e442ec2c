/// Actions an observer can take during genetic search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best individual found so far.
    StopEarly,

    /// Treat the evaluated individual as invalid.
    ///
    /// The individual stays in the population without an objective, so it
    /// ranks below every valid individual and is not considered for the best
    /// solution. Ignored for [`Event::GenerationCompleted`].
    ///
    /// Use this to steer the search away from a region even when evaluation
    /// succeeded.
    ///
    /// [`Event::GenerationCompleted`]: super::Event::GenerationCompleted
    AssumeWorse,
}
