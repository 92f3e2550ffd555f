//! Error types for the session layer.

use duelgrid_host::HostError;

/// Errors that can occur during session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A host request failed. Propagated as-is: the session performs no
    /// retry and no rollback of fields already mutated in the same
    /// handler.
    #[error(transparent)]
    Host(#[from] HostError),

    /// A persisted bundle doesn't describe a restorable session:
    /// its grid doesn't match its board size, or it carries more than
    /// two players.
    #[error("bundle is not restorable: {0}")]
    NotRestorable(String),
}
