use thiserror::Error;

/// Rejected start-up configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The hex size is NaN or infinite.
    #[error("hex size must be finite, got {0}")]
    NonFiniteHexSize(f64),

    /// The hex size is zero or negative.
    #[error("hex size must be positive, got {0}")]
    NonPositiveHexSize(f64),

    /// The window would have no pixels.
    #[error("window size must be at least 1 pixel")]
    EmptyWindow,
}
