//! Session configuration and lifecycle phase.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 3;

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Edge length of the square board. Fixed at session creation.
    pub board_size: usize,

    /// How long a transient notice ("not your turn", "already chose")
    /// stays visible before it is retracted.
    pub transient_ttl: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            transient_ttl: Duration::from_secs(3),
        }
    }
}

impl GameConfig {
    /// Fixes any out-of-range values so the config is safe to use.
    ///
    /// A zero board size cannot hold a game; it falls back to the
    /// canonical size with a warning.
    pub fn validated(mut self) -> Self {
        if self.board_size == 0 {
            tracing::warn!(
                fallback = DEFAULT_BOARD_SIZE,
                "board_size of 0 is unusable, falling back"
            );
            self.board_size = DEFAULT_BOARD_SIZE;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The coarse lifecycle state of a session.
///
/// ```text
/// Lobby ──(2nd join)──→ Active ──(win / draw / leave)──→ Stale
///   └────────────(member leave)────────────────────────────┘
/// ```
///
/// - **Lobby**: waiting for players; joins are accepted.
/// - **Active**: game in progress; moves are accepted.
/// - **Stale**: ended. Terminal; no event mutates the session again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Lobby,
    Active,
    Stale,
}

impl Phase {
    /// Returns `true` if the session still accepts joins.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Lobby)
    }

    /// Returns `true` if the session has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Stale)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lobby => write!(f, "Lobby"),
            Self::Active => write!(f, "Active"),
            Self::Stale => write!(f, "Stale"),
        }
    }
}
