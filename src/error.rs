//! Custom error types for kswitch

use thiserror::Error;

/// Main error type for kswitch operations
#[derive(Error, Debug)]
pub enum KswitchError {
    #[error("kubectl not found on PATH\n\n  Install kubectl:\n    https://kubernetes.io/docs/tasks/tools/")]
    NoKubectl,

    /// An external kubectl invocation could not run or exited non-zero
    #[error("{0}")]
    CommandFailed(String),
}

/// Result type alias for kswitch operations
pub type Result<T> = std::result::Result<T, KswitchError>;
