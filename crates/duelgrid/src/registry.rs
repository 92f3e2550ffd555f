//! Session registry: owns live sessions and routes host events to them.

use std::collections::HashMap;

use duelgrid_host::MessagingHost;
use duelgrid_protocol::{ChannelId, ControlId, UserId};
use duelgrid_session::{
    CoinFlip, GameConfig, RandomCoin, Session, SessionBundle,
};

use crate::DuelgridError;

/// An inbound event from the messaging host.
///
/// This is the session core's whole inbound surface: the host translates
/// whatever its platform produces (slash command, button click, member
/// update) into one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A user asked to join the game in `channel`.
    Join { channel: ChannelId, user: UserId },
    /// A user left the game in `channel`.
    Leave { channel: ChannelId, user: UserId },
    /// A user activated a control on one of the session's messages.
    ControlActivated {
        channel: ChannelId,
        user: UserId,
        control: ControlId,
    },
}

impl HostEvent {
    fn channel(&self) -> ChannelId {
        match self {
            Self::Join { channel, .. }
            | Self::Leave { channel, .. }
            | Self::ControlActivated { channel, .. } => *channel,
        }
    }
}

/// Owns every live session and dispatches events by channel.
///
/// Event delivery is serialized per session by construction: `dispatch`
/// takes `&mut self` and runs each handler to completion, so two events
/// for the same session can never interleave.
pub struct SessionRegistry<H: MessagingHost> {
    host: H,
    config: GameConfig,
    sessions: HashMap<ChannelId, Session<H>>,
}

impl<H: MessagingHost> SessionRegistry<H> {
    /// Creates an empty registry over the given host.
    pub fn new(host: H, config: GameConfig) -> Self {
        Self {
            host,
            config,
            sessions: HashMap::new(),
        }
    }

    /// Opens a fresh session on a newly allocated channel.
    pub async fn open_session(&mut self) -> Result<ChannelId, DuelgridError> {
        self.open_session_with_coin(Box::new(RandomCoin)).await
    }

    /// Opens a fresh session with an injected first-player coin.
    pub async fn open_session_with_coin(
        &mut self,
        coin: Box<dyn CoinFlip>,
    ) -> Result<ChannelId, DuelgridError> {
        let session =
            Session::create(self.host.clone(), self.config.clone(), coin)
                .await?;
        let channel = session.channel();
        self.sessions.insert(channel, session);
        tracing::info!(%channel, "session opened");
        Ok(channel)
    }

    /// Restores a persisted session and takes ownership of it.
    pub fn restore_session(
        &mut self,
        bundle: SessionBundle,
    ) -> Result<ChannelId, DuelgridError> {
        let session = Session::restore(
            self.host.clone(),
            self.config.clone(),
            bundle,
            Box::new(RandomCoin),
        )?;
        let channel = session.channel();
        self.sessions.insert(channel, session);
        Ok(channel)
    }

    /// Routes an event to the session owning its channel.
    ///
    /// Events for channels without a session are not an error: the host
    /// may relay activity from channels that were never ours, or from a
    /// session already torn down. They are logged and dropped.
    pub async fn dispatch(
        &mut self,
        event: HostEvent,
    ) -> Result<(), DuelgridError> {
        let channel = event.channel();
        let Some(session) = self.sessions.get_mut(&channel) else {
            tracing::debug!(%channel, "event for unknown channel, dropping");
            return Ok(());
        };

        match event {
            HostEvent::Join { user, .. } => session.handle_join(user).await?,
            HostEvent::Leave { user, .. } => session.handle_leave(user).await?,
            // The leave control maps to the same path as a platform leave.
            HostEvent::ControlActivated { user, control, .. }
                if control.is_leave() =>
            {
                session.handle_leave(user).await?
            }
            HostEvent::ControlActivated { user, control, .. } => {
                session.handle_selection(user, &control).await?
            }
        }
        Ok(())
    }

    /// The session bound to a channel, if any.
    pub fn session(&self, channel: &ChannelId) -> Option<&Session<H>> {
        self.sessions.get(channel)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Hands every session off for persistence, consuming the registry.
    ///
    /// Stale sessions export nothing and are simply dropped.
    pub fn suspend_all(self) -> Vec<SessionBundle> {
        let mut bundles: Vec<SessionBundle> = self
            .sessions
            .values()
            .filter_map(Session::suspend)
            .collect();
        // Deterministic order for whoever stores these.
        bundles.sort_by_key(|b| b.channel.0);
        tracing::info!(persisted = bundles.len(), "registry suspended");
        bundles
    }
}
