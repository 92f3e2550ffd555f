//! Outbound message shapes.
//!
//! The session communicates with players exclusively through these values.
//! The host turns them into whatever its platform renders; Duelgrid only
//! states text, controls, and who may be alerted.

use serde::{Deserialize, Serialize};

use crate::{Control, UserId};

/// Restricts whose ping/alert a message is allowed to trigger.
///
/// Turn notices mention exactly the acting player; everything else alerts
/// nobody. The default is the safe one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AllowedMentions {
    /// The message may not alert anyone.
    #[default]
    Nobody,
    /// The message may alert this one user and no other.
    Only(UserId),
}

/// The content of a channel message: text, optional controls, and a
/// mention restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    /// The message body.
    pub text: String,
    /// Interactive controls attached to the message, in render order.
    pub controls: Vec<Control>,
    /// Who the message may alert.
    pub mentions: AllowedMentions,
}

impl MessageContent {
    /// A plain text message with no controls and no mentions.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            controls: Vec::new(),
            mentions: AllowedMentions::Nobody,
        }
    }

    /// Attaches controls.
    pub fn with_controls(mut self, controls: Vec<Control>) -> Self {
        self.controls = controls;
        self
    }

    /// Restricts the mention allowance to a single user.
    pub fn mentioning(mut self, user: UserId) -> Self {
        self.mentions = AllowedMentions::Only(user);
        self
    }
}
