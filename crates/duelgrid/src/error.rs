//! Unified error type for Duelgrid.

use duelgrid_host::HostError;
use duelgrid_protocol::ProtocolError;
use duelgrid_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `duelgrid` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum DuelgridError {
    /// A protocol-level error (bundle encode/decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A host-level error (send, edit, delete, membership).
    #[error(transparent)]
    Host(#[from] HostError),

    /// A session-level error (host failure inside a handler, bundle
    /// restore rejection).
    #[error(transparent)]
    Session(#[from] SessionError),
}
