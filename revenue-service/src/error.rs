use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid pricing basis: {0}")]
    InvalidPricingBasis(String),

    #[error("Source error: {0}")]
    SourceError(#[from] anyhow::Error),

    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}
