//! Error types for visort-vis.

use thiserror::Error;

/// Result type for visort-vis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration cannot produce a drawable row of columns.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No trace generator matches the requested name.
    #[error(transparent)]
    UnknownAlgorithm(#[from] visort_trace::ParseAlgorithmError),

    /// A shuffle seed could not be parsed.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}
