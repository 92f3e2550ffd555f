//! The game session state machine.
//!
//! One `Session` per game channel. It is driven by three inbound events
//! (join, leave, and control activation) and responds by mutating its own
//! state and issuing host requests in a fixed program order. Later steps
//! of a handler are sequenced after earlier host calls complete, which is
//! what keeps externally visible effects ordered (a turn notice is always
//! retracted before the next one is sent, the board edit lands before the
//! selection window reopens).
//!
//! The host serializes event delivery per session; `&mut self` on every
//! handler makes that single-threaded model explicit in the types.

use duelgrid_host::MessagingHost;
use duelgrid_protocol::{
    ChannelId, Control, ControlId, MessageContent, MessageId, PlayerIcon,
    PlayerSlot, UserId, board_controls,
};

use crate::{
    Board, Cell, CoinFlip, GameConfig, Phase, SessionBundle, SessionError,
    WinningLine,
};

/// A two-player board game session bound to one channel.
pub struct Session<H: MessagingHost> {
    host: H,
    config: GameConfig,
    channel: ChannelId,
    phase: Phase,
    board: Board,
    players: Vec<UserId>,
    icons: [PlayerIcon; 2],
    current: Option<PlayerSlot>,
    awaiting_selection: bool,
    board_message: Option<MessageId>,
    turn_notice: Option<MessageId>,
    coin: Box<dyn CoinFlip>,
}

impl<H: MessagingHost> Session<H> {
    /// Creates a fresh lobby-phase session.
    ///
    /// Allocates a game channel via the host; a failed allocation is the
    /// only way creation fails, and it propagates untouched.
    pub async fn create(
        host: H,
        config: GameConfig,
        coin: Box<dyn CoinFlip>,
    ) -> Result<Self, SessionError> {
        let config = config.validated();
        let channel = host.create_channel().await?;
        tracing::info!(%channel, size = config.board_size, "session created");

        Ok(Self {
            board: Board::new(config.board_size),
            host,
            channel,
            config,
            phase: Phase::Lobby,
            players: Vec::new(),
            icons: [
                PlayerIcon::for_slot(PlayerSlot::First),
                PlayerIcon::for_slot(PlayerSlot::Second),
            ],
            current: None,
            awaiting_selection: false,
            board_message: None,
            turn_notice: None,
            coin,
        })
    }

    /// Restores a session from a persisted bundle, verbatim.
    ///
    /// No derived field is recomputed; the bundle is trusted except for
    /// shape checks that would make the session unusable.
    pub fn restore(
        host: H,
        config: GameConfig,
        bundle: SessionBundle,
        coin: Box<dyn CoinFlip>,
    ) -> Result<Self, SessionError> {
        if bundle.cells.len() != bundle.board_size * bundle.board_size {
            return Err(SessionError::NotRestorable(format!(
                "grid has {} cells for board size {}",
                bundle.cells.len(),
                bundle.board_size
            )));
        }
        if bundle.players.len() > 2 {
            return Err(SessionError::NotRestorable(format!(
                "bundle carries {} players",
                bundle.players.len()
            )));
        }

        tracing::info!(
            channel = %bundle.channel,
            phase = %bundle.phase,
            "session restored"
        );

        Ok(Self {
            host,
            channel: bundle.channel,
            phase: bundle.phase,
            board: Board::from_parts(
                bundle.board_size,
                bundle.cells,
                bundle.remaining,
            ),
            players: bundle.players,
            icons: bundle.icons,
            current: bundle.current,
            awaiting_selection: bundle.awaiting_selection,
            board_message: bundle.board_message,
            turn_notice: bundle.turn_notice,
            config,
            coin,
        })
    }

    /// Exports the session for persistence.
    ///
    /// Returns `None` for a stale session: a finished board is a closed
    /// artifact and is not worth reviving. This is an export, not a
    /// mutation; the session remains usable.
    pub fn suspend(&self) -> Option<SessionBundle> {
        if self.phase.is_over() {
            return None;
        }
        Some(SessionBundle {
            phase: self.phase,
            channel: self.channel,
            board_message: self.board_message,
            current: self.current,
            turn_notice: self.turn_notice,
            awaiting_selection: self.awaiting_selection,
            remaining: self.board.remaining(),
            board_size: self.board.size(),
            players: self.players.clone(),
            cells: self.board.cells().to_vec(),
            icons: self.icons,
        })
    }

    // -- Membership ---------------------------------------------------------

    /// Handles a user asking to join the game.
    pub async fn handle_join(&mut self, user: UserId) -> Result<(), SessionError> {
        match self.phase {
            Phase::Active => {
                self.host
                    .send_private(user, "This game has already started.")
                    .await?;
                return Ok(());
            }
            Phase::Stale => {
                self.host
                    .send_private(user, "This game has already finished.")
                    .await?;
                return Ok(());
            }
            Phase::Lobby => {}
        }

        self.players.push(user);
        self.host.add_member(self.channel, user, true).await?;
        tracing::info!(
            channel = %self.channel,
            %user,
            players = self.players.len(),
            "player joined"
        );

        if self.players.len() < 2 {
            self.host
                .send_message(
                    self.channel,
                    MessageContent::text("Waiting for a second player..."),
                )
                .await?;
            return Ok(());
        }

        self.host
            .send_message(
                self.channel,
                MessageContent::text("Both seats are taken, starting the game."),
            )
            .await?;
        self.start_game().await
    }

    /// Handles a user leaving the game.
    ///
    /// A leave by a present member always makes the session stale. If
    /// another player remains and the game wasn't already over, they get
    /// a notice with a leave control and the departing user is removed
    /// from the channel; the sole-member case stays silent.
    pub async fn handle_leave(&mut self, user: UserId) -> Result<(), SessionError> {
        let Some(position) = self.players.iter().position(|p| *p == user) else {
            return Ok(());
        };

        self.players.remove(position);
        let was_over = self.phase.is_over();
        self.phase = Phase::Stale;
        tracing::info!(
            channel = %self.channel,
            %user,
            remaining_players = self.players.len(),
            "player left, session stale"
        );

        if self.players.is_empty() || was_over {
            return Ok(());
        }

        self.host
            .send_message(
                self.channel,
                MessageContent::text(
                    "A player left. This game is now stale, please leave the channel.",
                )
                .with_controls(vec![Control::leave()]),
            )
            .await?;
        self.host.remove_member(self.channel, user).await?;
        Ok(())
    }

    // -- Game start and turn cycle ------------------------------------------

    /// Starts the game once the second player has joined.
    async fn start_game(&mut self) -> Result<(), SessionError> {
        self.phase = Phase::Active;

        let content = MessageContent::text(self.board_caption())
            .with_controls(board_controls(self.board.size()));
        let handle = self.host.send_message(self.channel, content).await?;
        self.board_message = Some(handle);

        let first = self.coin.flip();
        self.current = Some(first);
        tracing::info!(
            channel = %self.channel,
            first = %self.players[first.index()],
            "game started"
        );

        self.notify_turn(first).await
    }

    /// Retracts the previous turn notice, announces whose turn it is, and
    /// only then reopens the selection window. The ordering matters: a
    /// move must not be accepted before the notice mechanics finish.
    async fn notify_turn(&mut self, slot: PlayerSlot) -> Result<(), SessionError> {
        if let Some(previous) = self.turn_notice.take() {
            self.host.delete_message(self.channel, previous).await?;
        }

        let user = self.players[slot.index()];
        let content = MessageContent::text(format!("{user}, it's your turn."))
            .mentioning(user);
        let handle = self.host.send_message(self.channel, content).await?;
        self.turn_notice = Some(handle);
        self.awaiting_selection = true;
        Ok(())
    }

    // -- Move handling ------------------------------------------------------

    /// Handles a control activation on the board.
    ///
    /// Activations that don't address a cell on a running game are
    /// silently dropped; out-of-turn and out-of-window activations get a
    /// transient notice; a collision with an occupied cell is a
    /// diagnostic-only anomaly.
    pub async fn handle_selection(
        &mut self,
        user: UserId,
        control: &ControlId,
    ) -> Result<(), SessionError> {
        let Some(cell) = control.as_cell() else {
            return Ok(());
        };
        if self.phase.is_over() || !self.board.in_bounds(cell) {
            return Ok(());
        }
        let Some(board_message) = self.board_message else {
            return Ok(());
        };
        let Some(slot) = self.current else {
            return Ok(());
        };

        if self.players.get(slot.index()) != Some(&user) {
            self.transient_notice(format!("{user}, it's not your turn."))
                .await?;
            return Ok(());
        }
        if !self.awaiting_selection {
            self.transient_notice(format!(
                "{user}, you already made your choice this turn."
            ))
            .await?;
            return Ok(());
        }

        if !self.board.place(cell, slot) {
            // The rendered control claimed the cell was free; the board
            // disagrees. Somebody's view is out of sync.
            let (row, column) = self.board.decode(cell);
            tracing::warn!(
                channel = %self.channel,
                %user,
                row,
                column,
                "selection for an occupied cell, ignoring"
            );
            return Ok(());
        }

        if let Some(line) = self.board.winning_line() {
            return self.resolve_win(board_message, slot, line).await;
        }

        self.awaiting_selection = false;
        self.host
            .edit_control(
                self.channel,
                board_message,
                Control::marked_cell(cell, PlayerIcon::for_slot(slot)),
            )
            .await?;

        if self.board.remaining() == 0 {
            return self.resolve_draw().await;
        }

        let next = slot.other();
        self.current = Some(next);
        self.notify_turn(next).await
    }

    // -- Resolutions --------------------------------------------------------

    /// Ends the game with a winner: full board re-render with the winning
    /// line distinguished, then the victory notice.
    async fn resolve_win(
        &mut self,
        board_message: MessageId,
        slot: PlayerSlot,
        line: WinningLine,
    ) -> Result<(), SessionError> {
        self.phase = Phase::Stale;

        if let Some(notice) = self.turn_notice.take() {
            self.host.delete_message(self.channel, notice).await?;
        }

        let content = MessageContent::text(self.board_caption())
            .with_controls(self.closing_controls(Some(line)));
        self.host
            .edit_message(self.channel, board_message, content)
            .await?;

        let winner = self.players[slot.index()];
        tracing::info!(channel = %self.channel, %winner, "game won");
        self.host
            .send_message(
                self.channel,
                MessageContent::text(format!("{winner} won the game!"))
                    .mentioning(winner)
                    .with_controls(vec![Control::leave()]),
            )
            .await?;
        Ok(())
    }

    /// Ends the game with no winner.
    async fn resolve_draw(&mut self) -> Result<(), SessionError> {
        if let Some(notice) = self.turn_notice.take() {
            self.host.delete_message(self.channel, notice).await?;
        }
        self.phase = Phase::Stale;

        tracing::info!(channel = %self.channel, "game drawn");
        self.host
            .send_message(
                self.channel,
                MessageContent::text("The game ended in a draw.")
                    .with_controls(vec![Control::leave()]),
            )
            .await?;
        Ok(())
    }

    // -- Helpers ------------------------------------------------------------

    /// The caption above the board: who plays which icon.
    fn board_caption(&self) -> String {
        format!(
            "{} plays {}, {} plays {}.",
            self.players[0],
            self.icons[0],
            self.players[1],
            self.icons[1],
        )
    }

    /// The full control grid for a finished board: everything disabled,
    /// winning cells (if any) visually distinguished.
    fn closing_controls(&self, line: Option<WinningLine>) -> Vec<Control> {
        let winning = line.map(|l| l.cells).unwrap_or([usize::MAX; 3]);
        (0..self.board.size() * self.board.size())
            .map(|index| match self.board.cell(index) {
                Cell::Occupied(owner) if winning.contains(&index) => {
                    Control::winning_cell(index, PlayerIcon::for_slot(owner))
                }
                Cell::Occupied(owner) => {
                    Control::marked_cell(index, PlayerIcon::for_slot(owner))
                }
                Cell::Empty => {
                    let mut control = Control::empty_cell(index);
                    control.disabled = true;
                    control
                }
            })
            .collect()
    }

    /// Sends a short-lived notice and schedules its retraction.
    ///
    /// The retraction is fire-and-forget: it outlives the handler, and a
    /// failure (channel already cleaned up) is logged and dropped.
    async fn transient_notice(&self, text: String) -> Result<(), SessionError> {
        let handle = self
            .host
            .send_message(self.channel, MessageContent::text(text))
            .await?;

        let host = self.host.clone();
        let channel = self.channel;
        let ttl = self.config.transient_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Err(error) = host.delete_message(channel, handle).await {
                tracing::debug!(
                    %channel,
                    %error,
                    "transient notice retraction failed"
                );
            }
        });
        Ok(())
    }

    // -- Accessors ----------------------------------------------------------

    /// The channel this session is bound to.
    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Players in join order.
    pub fn players(&self) -> &[UserId] {
        &self.players
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is, once the game has started.
    pub fn current(&self) -> Option<PlayerSlot> {
        self.current
    }

    /// The user whose turn it is, once the game has started.
    pub fn current_user(&self) -> Option<UserId> {
        self.current
            .and_then(|slot| self.players.get(slot.index()).copied())
    }

    /// Whether a move from the current player would be accepted.
    pub fn awaiting_selection(&self) -> bool {
        self.awaiting_selection
    }

    /// Handle of the persistent board message, once the game has started.
    pub fn board_message(&self) -> Option<MessageId> {
        self.board_message
    }

    /// Handle of the standing turn notice, if any.
    pub fn turn_notice(&self) -> Option<MessageId> {
        self.turn_notice
    }
}
