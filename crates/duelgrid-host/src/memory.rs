//! In-memory [`MessagingHost`] implementation.
//!
//! Allocates monotonically increasing channel and message ids and records
//! every operation in arrival order. Sessions issue host calls in a
//! specified sequence (retract-then-send, edit-before-flag-flip), and the
//! ordered op log is how tests observe that sequence from the outside.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use duelgrid_protocol::{
    ChannelId, Control, MessageContent, MessageId, UserId,
};
use tokio::sync::Mutex;

use crate::{HostError, MessagingHost};

/// A single recorded host operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    ChannelCreated {
        channel: ChannelId,
    },
    MessageSent {
        channel: ChannelId,
        message: MessageId,
        content: MessageContent,
    },
    MessageEdited {
        channel: ChannelId,
        message: MessageId,
        content: MessageContent,
    },
    ControlReplaced {
        channel: ChannelId,
        message: MessageId,
        control: Control,
    },
    MessageDeleted {
        channel: ChannelId,
        message: MessageId,
    },
    MemberAdded {
        channel: ChannelId,
        user: UserId,
        silent: bool,
    },
    MemberRemoved {
        channel: ChannelId,
        user: UserId,
    },
    PrivateSent {
        user: UserId,
        text: String,
    },
}

#[derive(Default)]
struct Inner {
    next_channel: u64,
    next_message: u64,
    ops: Vec<HostOp>,
    messages: HashMap<MessageId, (ChannelId, MessageContent)>,
    deleted: HashSet<MessageId>,
    members: HashMap<ChannelId, Vec<UserId>>,
    fail_next_send: bool,
}

/// An in-memory messaging host.
///
/// Cheap to clone: clones share the same underlying state, the way a
/// real platform client handle would.
#[derive(Clone, Default)]
pub struct InMemoryHost {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryHost {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `send_message` call fail, once.
    pub async fn fail_next_send(&self) {
        self.inner.lock().await.fail_next_send = true;
    }

    /// All operations recorded so far, in order.
    pub async fn ops(&self) -> Vec<HostOp> {
        self.inner.lock().await.ops.clone()
    }

    /// Number of operations recorded so far.
    pub async fn op_count(&self) -> usize {
        self.inner.lock().await.ops.len()
    }

    /// The current content of a message, or `None` if it was never sent
    /// or has been deleted.
    pub async fn message(&self, message: MessageId) -> Option<MessageContent> {
        self.inner
            .lock()
            .await
            .messages
            .get(&message)
            .map(|(_, content)| content.clone())
    }

    /// Current members of a channel, in join order.
    pub async fn members(&self, channel: ChannelId) -> Vec<UserId> {
        self.inner
            .lock()
            .await
            .members
            .get(&channel)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a message has been deleted.
    pub async fn deleted(&self, message: MessageId) -> bool {
        self.inner.lock().await.deleted.contains(&message)
    }
}

impl MessagingHost for InMemoryHost {
    async fn create_channel(&self) -> Result<ChannelId, HostError> {
        let mut inner = self.inner.lock().await;
        inner.next_channel += 1;
        let channel = ChannelId(inner.next_channel);
        inner.members.insert(channel, Vec::new());
        inner.ops.push(HostOp::ChannelCreated { channel });
        tracing::debug!(%channel, "channel created");
        Ok(channel)
    }

    async fn send_message(
        &self,
        channel: ChannelId,
        content: MessageContent,
    ) -> Result<MessageId, HostError> {
        let mut inner = self.inner.lock().await;
        if inner.fail_next_send {
            inner.fail_next_send = false;
            return Err(HostError::SendFailed(
                channel,
                "injected failure".into(),
            ));
        }
        inner.next_message += 1;
        let message = MessageId(inner.next_message);
        inner.messages.insert(message, (channel, content.clone()));
        inner.ops.push(HostOp::MessageSent {
            channel,
            message,
            content,
        });
        Ok(message)
    }

    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: MessageContent,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock().await;
        match inner.messages.get_mut(&message) {
            Some((_, stored)) => *stored = content.clone(),
            None => {
                return Err(HostError::EditFailed(
                    message,
                    "unknown message".into(),
                ));
            }
        }
        inner.ops.push(HostOp::MessageEdited {
            channel,
            message,
            content,
        });
        Ok(())
    }

    async fn edit_control(
        &self,
        channel: ChannelId,
        message: MessageId,
        control: Control,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock().await;
        let Some((_, stored)) = inner.messages.get_mut(&message) else {
            return Err(HostError::EditFailed(
                message,
                "unknown message".into(),
            ));
        };
        let Some(slot) = stored.controls.iter_mut().find(|c| c.id == control.id)
        else {
            return Err(HostError::EditFailed(
                message,
                format!("no control with identity {}", control.id),
            ));
        };
        *slot = control.clone();
        inner.ops.push(HostOp::ControlReplaced {
            channel,
            message,
            control,
        });
        Ok(())
    }

    async fn delete_message(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock().await;
        if inner.messages.remove(&message).is_none() {
            return Err(HostError::DeleteFailed(
                message,
                "unknown message".into(),
            ));
        }
        inner.deleted.insert(message);
        inner.ops.push(HostOp::MessageDeleted { channel, message });
        Ok(())
    }

    async fn add_member(
        &self,
        channel: ChannelId,
        user: UserId,
        silent: bool,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock().await;
        inner.members.entry(channel).or_default().push(user);
        inner.ops.push(HostOp::MemberAdded {
            channel,
            user,
            silent,
        });
        Ok(())
    }

    async fn remove_member(
        &self,
        channel: ChannelId,
        user: UserId,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock().await;
        if let Some(members) = inner.members.get_mut(&channel) {
            members.retain(|m| *m != user);
        }
        inner.ops.push(HostOp::MemberRemoved { channel, user });
        Ok(())
    }

    async fn send_private(
        &self,
        user: UserId,
        text: &str,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock().await;
        inner.ops.push(HostOp::PrivateSent {
            user,
            text: text.to_string(),
        });
        Ok(())
    }
}
