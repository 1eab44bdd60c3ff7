use thiserror::Error;

/// Failures raised by [`crate::price_unit::PriceUnit`] and locale parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceUnitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for loading and saving the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid port `{0}`")]
    InvalidPort(String),
}

/// Top-level error surfaced by the startup routine.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    PriceUnit(#[from] PriceUnitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Unknown price unit: {0}")]
    UnknownPriceUnit(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
