use protodisk::AccretionError;
use thiserror::Error;

/// Reasons a stellar system could not be generated.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid stellar parameters: mass ratio {mass} must be positive and finite")]
    InvalidStellarParameters { mass: f64 },

    #[error("invalid dust disk limits: inner {inner} AU, outer {outer} AU")]
    InvalidDiskLimits { inner: f64, outer: f64 },

    #[error("dust disk not exhausted after {steps} protoplanet injections")]
    StepBudgetExhausted { steps: usize },

    #[error(transparent)]
    Accretion(#[from] AccretionError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse generation config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("failed to serialize generation config: {0}")]
    Serialize(#[source] ron::Error),
}
