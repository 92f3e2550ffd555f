//! The persisted session bundle.
//!
//! A bundle is the exact serialized layout of a session's state. Restoring
//! one reconstructs the in-memory session verbatim; no field is
//! recomputed, including the remaining-move counter.

use duelgrid_protocol::{
    ChannelId, MessageId, PlayerIcon, PlayerSlot, UserId,
};
use serde::{Deserialize, Serialize};

use crate::{Cell, Phase};

/// Everything a session persists between process lifetimes.
///
/// Produced by [`Session::suspend`](crate::Session::suspend) and consumed
/// by [`Session::restore`](crate::Session::restore). Stale sessions never
/// produce one, since a finished board is a closed artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBundle {
    /// Lifecycle phase at suspension time.
    pub phase: Phase,
    /// The game channel this session is bound to.
    pub channel: ChannelId,
    /// Handle of the persistent board message, if the game has started.
    pub board_message: Option<MessageId>,
    /// Index of the player whose turn it is, if the game has started.
    pub current: Option<PlayerSlot>,
    /// Handle of the most recent turn notice, if one is standing.
    pub turn_notice: Option<MessageId>,
    /// Whether a move from the current player would be accepted.
    pub awaiting_selection: bool,
    /// Moves left before the board is full.
    pub remaining: usize,
    /// Edge length of the board.
    pub board_size: usize,
    /// Players in join order, at most two.
    pub players: Vec<UserId>,
    /// The grid, flattened in row-major order.
    pub cells: Vec<Cell>,
    /// Icon assignment for the two slots.
    pub icons: [PlayerIcon; 2],
}
