/// Failures of the accretion iteration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccretionError {
    #[error("dust accretion did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },
}
