//! Randomness seam for the first-player pick.
//!
//! The only random decision a session makes is which player moves first.
//! It goes through a trait so tests can pin the outcome instead of
//! depending on a global generator.

use duelgrid_protocol::PlayerSlot;
use rand::Rng;

/// A uniform two-outcome random source.
pub trait CoinFlip: Send {
    /// Picks one of the two slots, each with probability 1/2.
    fn flip(&mut self) -> PlayerSlot;
}

/// The default coin, backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCoin;

impl CoinFlip for RandomCoin {
    fn flip(&mut self) -> PlayerSlot {
        if rand::rng().random::<bool>() {
            PlayerSlot::First
        } else {
            PlayerSlot::Second
        }
    }
}

/// A coin that always lands the same way. Test use only, but kept public
/// so integration suites and the demo can script deterministic games.
#[derive(Debug, Clone, Copy)]
pub struct FixedCoin(pub PlayerSlot);

impl CoinFlip for FixedCoin {
    fn flip(&mut self) -> PlayerSlot {
        self.0
    }
}
