use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoherenceError {
    #[error("n_simulations must be positive, got {0}")]
    InvalidSimulationCount(i64),
    #[error("noise term must be > 0, got {0}")]
    NonPositiveNoise(f64),
    #[error("manifest payload serialization failed")]
    Serialize(#[from] serde_json::Error),
}
