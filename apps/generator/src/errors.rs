use thiserror::Error;

use crate::client::ClientError;

/// Application-level error type.
///
/// The population pass does no local recovery: every failure propagates to
/// the orchestrator and aborts the run, leaving the in-memory document in a
/// partially-modified state. Rollback is intentionally not provided.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required placeholder token or sentinel paragraph is absent.
    #[error("Placeholder not found: {0}")]
    PlaceholderNotFound(String),

    /// A located node had an unexpected variant or shape (e.g. a product
    /// table without its template row).
    #[error("Structural mismatch: {0}")]
    StructuralMismatch(String),

    /// A caller-supplied argument violates an operation's contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Data source error: {0}")]
    DataSource(#[from] ClientError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
