//! Error types for the host layer.

use duelgrid_protocol::{ChannelId, MessageId};

/// Errors surfaced by a messaging host.
///
/// These are deliberately coarse: the session doesn't recover from host
/// failures, it only propagates them, so the variants exist for logging
/// and for callers above the session to decide what to do.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Channel allocation failed.
    #[error("channel creation failed: {0}")]
    ChannelCreateFailed(String),

    /// Sending a message failed.
    #[error("send to {0} failed: {1}")]
    SendFailed(ChannelId, String),

    /// Editing a message (or one of its controls) failed.
    #[error("edit of {0} failed: {1}")]
    EditFailed(MessageId, String),

    /// Deleting a message failed.
    #[error("delete of {0} failed: {1}")]
    DeleteFailed(MessageId, String),

    /// Adding or removing a channel member failed.
    #[error("membership change in {0} failed: {1}")]
    MembershipFailed(ChannelId, String),

    /// The host is gone (shut down, disconnected).
    #[error("messaging host unavailable")]
    Unavailable,
}
