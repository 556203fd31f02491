use life_core::ConfigError;
use thiserror::Error;

/// Errors loading, saving or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),

    #[error(
        "initial proportions must be 3 finite, non-negative numbers with a positive sum, got {0:?}"
    )]
    InvalidProportions(Vec<f64>),

    #[error("config has no file path to save to")]
    MissingPath,
}

pub type ConfigResult<T> = Result<T, ConfigFileError>;
