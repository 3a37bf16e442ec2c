//! Chiller effectiveness model and the fit of its reference point.
//!
//! The heat exchanger between the cold storage tank and the air stream is
//! described by an effectiveness correlation anchored at an unknown reference
//! pair (efficacy, capacity). Two operating points of the chiller scenario
//! each fix a target effectiveness, and [`find_reference`] searches for the
//! pair whose correlation reproduces both targets.
//!
//! ```no_run
//! use refit_chiller::{EffectivenessModel, find_reference};
//! use refit_solvers::optimization::genetic::Config;
//!
//! let model = EffectivenessModel::default();
//! let solution = find_reference(&model, &Config::default(), 2017);
//! println!("{:?} scores {}", solution.pair, solution.fitness);
//! ```

mod capacities;
mod constants;
mod effectiveness;
mod error;
mod fitness;
mod model;
mod problem;
mod solve;

pub use capacities::DerivedCapacities;
pub use constants::PhysicalConstants;
pub use effectiveness::{CandidateEffectiveness, ReferencePair, TargetEffectiveness};
pub use error::DomainError;
pub use fitness::{MAX_FITNESS, WORST_FITNESS, fitness};
pub use model::EffectivenessModel;
pub use problem::{CAPACITY_DOMAIN, EFFICACY_DOMAIN, ReferenceFit};
pub use solve::{ReferenceSolution, find_reference, find_reference_with_rng};
