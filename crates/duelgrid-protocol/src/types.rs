//! Identity types shared across the Duelgrid stack.
//!
//! Everything that crosses the boundary to the messaging host is referred
//! to by one of these opaque identifiers. The host decides what they mean
//! on its side (a snowflake, a UUID, a row id); Duelgrid only compares
//! and stores them.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a platform user.
///
/// Newtype over `u64` so a `UserId` can't be confused with a `ChannelId`
/// even though both are plain integers underneath.
///
/// `#[serde(transparent)]` serializes this as the bare number, which is
/// what the persisted session bundle stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// A unique identifier for a game channel.
///
/// One channel hosts exactly one session; the session allocates it at
/// creation time and never migrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub u64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{}", self.0)
    }
}

/// An opaque handle to a previously sent message.
///
/// Returned by the host on send, usable for later edit/delete. The session
/// keeps two of these long-term: the persistent board message and the most
/// recent turn notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Player slots and icons
// ---------------------------------------------------------------------------

/// One of the two player positions in a session, in join order.
///
/// Serialized as the raw index (0 or 1) so the persisted bundle stores a
/// plain "current player index" field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub enum PlayerSlot {
    /// The player who joined first (index 0).
    First,
    /// The player who joined second (index 1).
    Second,
}

impl PlayerSlot {
    /// The slot's position in the ordered player list.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The opposing slot.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Converts a raw index back into a slot. `None` for anything but 0 or 1.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }
}

impl From<PlayerSlot> for usize {
    fn from(slot: PlayerSlot) -> usize {
        slot.index()
    }
}

impl TryFrom<usize> for PlayerSlot {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
            .ok_or_else(|| format!("player index must be 0 or 1, got {index}"))
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.index())
    }
}

/// The mark a player stamps onto the board.
///
/// Icon assignment is fixed by slot: the first joiner plays crosses, the
/// second noughts. The host decides how a glyph is actually rendered
/// (emoji, sprite, plain text); `glyph()` is a rendering hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerIcon {
    Cross,
    Nought,
}

impl PlayerIcon {
    /// The fixed icon for a player slot.
    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::First => Self::Cross,
            PlayerSlot::Second => Self::Nought,
        }
    }

    /// Plain-text rendering hint for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Cross => "X",
            Self::Nought => "O",
        }
    }
}

impl fmt::Display for PlayerIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
