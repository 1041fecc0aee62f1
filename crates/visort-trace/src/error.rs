//! Error types for visort-trace.

use thiserror::Error;

/// An algorithm name that does not match any trace generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort algorithm: {name:?} (expected one of: bubble, quick)")]
pub struct ParseAlgorithmError {
    pub name: String,
}
