//! Shared protocol types for Duelgrid.
//!
//! This crate defines the vocabulary the session and the messaging host
//! have in common:
//!
//! - **Identities** ([`UserId`], [`ChannelId`], [`MessageId`]): opaque
//!   references into the host's world.
//! - **Controls** ([`Control`], [`ControlId`], [`ControlStyle`]): the
//!   interactive elements attached to messages, including the cell-index
//!   encoding used by the board grid.
//! - **Messages** ([`MessageContent`], [`AllowedMentions`]): what the
//!   session asks the host to deliver.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how a session bundle is
//!   turned into bytes for persistence and back.
//!
//! The crate knows nothing about game rules or the host's wire protocol;
//! it only names the things both sides refer to.

mod codec;
mod control;
mod error;
mod message;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use control::{
    Control, ControlId, ControlStyle, LEAVE_CONTROL_ID, board_controls,
};
pub use error::ProtocolError;
pub use message::{AllowedMentions, MessageContent};
pub use types::{ChannelId, MessageId, PlayerIcon, PlayerSlot, UserId};
