//! # Duelgrid
//!
//! Two-player board game sessions for chat platforms.
//!
//! Duelgrid runs the game: membership, turn order, board state, win and
//! draw detection, and the sequencing of every notification tied to a
//! state transition. Everything platform-specific (rendering controls,
//! creating channels, delivering messages) lives behind the
//! [`MessagingHost`](duelgrid_host::MessagingHost) trait; the session
//! drives it by intent.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use duelgrid::prelude::*;
//!
//! # async fn run() -> Result<(), DuelgridError> {
//! let host = InMemoryHost::new();
//! let mut registry = SessionRegistry::new(host, GameConfig::default());
//!
//! let channel = registry.open_session().await?;
//! registry
//!     .dispatch(HostEvent::Join { channel, user: UserId(1) })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod registry;

pub use error::DuelgridError;
pub use registry::{HostEvent, SessionRegistry};

/// The working set, re-exported for one-line imports.
pub mod prelude {
    pub use duelgrid_host::{HostError, HostOp, InMemoryHost, MessagingHost};
    #[cfg(feature = "json")]
    pub use duelgrid_protocol::JsonCodec;
    pub use duelgrid_protocol::{
        AllowedMentions, ChannelId, Codec, Control, ControlId, ControlStyle,
        MessageContent, MessageId, PlayerIcon, PlayerSlot, UserId,
        board_controls,
    };
    pub use duelgrid_session::{
        Board, Cell, CoinFlip, FixedCoin, GameConfig, Phase, RandomCoin,
        Session, SessionBundle, SessionError, WinningLine,
    };

    pub use crate::{DuelgridError, HostEvent, SessionRegistry};
}
