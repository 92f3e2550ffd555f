//! Messaging-host abstraction for Duelgrid.
//!
//! The session never talks to a chat platform directly. It drives a
//! [`MessagingHost`], an abstract capability set covering everything a
//! game needs from its platform: channel allocation, message delivery,
//! in-place edits, deletion, and channel membership. How a host renders a
//! control grid or what a "silent" join looks like is entirely its
//! business; the session only states intent.
//!
//! [`InMemoryHost`] is the provided implementation: it records every
//! operation in order, which makes it both a development stand-in and the
//! test double every sequencing assertion is written against.

mod error;
mod memory;

pub use error::HostError;
pub use memory::{HostOp, InMemoryHost};

use std::future::Future;

use duelgrid_protocol::{
    ChannelId, Control, MessageContent, MessageId, UserId,
};

/// The capability set a chat platform offers to a game session.
///
/// Implementations are handles: `Clone` is a supertrait because the
/// session hands an owned copy to fire-and-forget cleanup tasks, so a
/// clone must be cheap and refer to the same underlying platform client.
///
/// Every operation is asynchronous and fallible. The session issues calls
/// in a strict program order and never retries; a failure propagates to
/// the event handler that triggered it.
pub trait MessagingHost: Clone + Send + Sync + 'static {
    /// Allocates a fresh channel scoped to one game session.
    fn create_channel(
        &self,
    ) -> impl Future<Output = Result<ChannelId, HostError>> + Send;

    /// Sends a message to a channel. Returns a handle usable for later
    /// edits and deletion.
    fn send_message(
        &self,
        channel: ChannelId,
        content: MessageContent,
    ) -> impl Future<Output = Result<MessageId, HostError>> + Send;

    /// Replaces a message's content and controls wholesale.
    fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: MessageContent,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Replaces a single control within a message, addressed by its
    /// identity, leaving the rest of the grid untouched.
    fn edit_control(
        &self,
        channel: ChannelId,
        message: MessageId,
        control: Control,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Deletes a message by handle.
    fn delete_message(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Adds a user to a channel. With `silent`, the join must not produce
    /// a visible or audible announcement on the platform.
    fn add_member(
        &self,
        channel: ChannelId,
        user: UserId,
        silent: bool,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Removes a user from a channel.
    fn remove_member(
        &self,
        channel: ChannelId,
        user: UserId,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Sends a private, user-scoped message outside any game channel.
    fn send_private(
        &self,
        user: UserId,
        text: &str,
    ) -> impl Future<Output = Result<(), HostError>> + Send;
}
