use thiserror::Error;

/// Errors raised when a trial reference pair falls outside the domain of the
/// effectiveness correlation.
///
/// The genetic search treats every variant as a failed evaluation, so these
/// never escape a fit.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The trial efficacy is exactly one, which divides by zero.
    #[error("reference efficacy must differ from 1")]
    UnitEfficacy,

    /// The trial efficacy is NaN or infinite.
    #[error("reference efficacy must be finite, got {efficacy}")]
    NonFiniteEfficacy { efficacy: f64 },

    /// A capacity rate is zero, negative, or not finite.
    #[error("capacity `{name}` must be finite and positive, got {value} W/K")]
    InvalidCapacity { name: &'static str, value: f64 },

    /// The reference capacities are equal, leaving the exponent undefined.
    #[error("reference capacities are balanced ({value} W/K on both streams)")]
    BalancedReference { value: f64 },

    /// A negative base cannot be raised to a fractional exponent.
    #[error("negative base {base} with fractional exponent {exponent}")]
    NegativeBase { base: f64, exponent: f64 },

    /// The correlation produced a NaN or infinite effectiveness.
    #[error("effectiveness is not finite: {value}")]
    NonFinite { value: f64 },
}
