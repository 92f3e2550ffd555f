//! Game session state machine for Duelgrid.
//!
//! A [`Session`] tracks membership, turn order, board state, and win/draw
//! detection for one two-player match, and drives an abstract messaging
//! host through each state transition. The host delivers events (join,
//! leave, control activation); the session answers with an exactly-ordered
//! sequence of host requests.
//!
//! # Key types
//!
//! - [`Session`]: the state machine itself
//! - [`Phase`]: coarse lifecycle: Lobby → Active → Stale (terminal)
//! - [`Board`] / [`Cell`] / [`WinningLine`]: grid state and line detection
//! - [`SessionBundle`]: the persisted layout, restored verbatim
//! - [`CoinFlip`]: the injectable randomness seam for the first-player pick

mod board;
mod bundle;
mod coin;
mod config;
mod error;
mod session;

pub use board::{Board, Cell, WinningLine};
pub use bundle::SessionBundle;
pub use coin::{CoinFlip, FixedCoin, RandomCoin};
pub use config::{DEFAULT_BOARD_SIZE, GameConfig, Phase};
pub use error::SessionError;
pub use session::Session;
