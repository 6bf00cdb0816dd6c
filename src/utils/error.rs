use thiserror::Error;

/// Rejected engine or host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Width or height is zero.
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// `width * height` does not fit into memory addressing.
    #[error("grid {width}x{height} is too large")]
    GridTooLarge { width: usize, height: usize },

    /// Model name that matches none of the cell models.
    #[error("unknown cell model {0:?} (expected binary, two-tier or aging)")]
    UnknownModel(String),

    /// Seed that is not an unsigned 64-bit integer.
    #[error("invalid seed {0:?}")]
    InvalidSeed(String),
}
