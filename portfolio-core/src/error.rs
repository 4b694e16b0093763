//! Error types for portfolio-core.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by [`ProjectStore`](crate::ProjectStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Request payload was absent, malformed, or lacked a title.
    #[error("Invalid project data")]
    InvalidInput,

    /// No project carries the requested id.
    #[error("Project not found")]
    NotFound {
        /// Id that was looked up.
        id: u64,
    },
}
