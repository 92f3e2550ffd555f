//! Plays a complete match against the in-memory host and prints the
//! resulting host operation log.
//!
//! Run with `RUST_LOG=debug` to watch the session's own tracing output
//! interleave with the scripted moves.

use duelgrid::prelude::*;

/// The scripted moves: U-1 takes the top row while U-2 answers in the
/// middle row.
const MOVES: [(u64, usize); 5] = [(1, 0), (2, 3), (1, 1), (2, 4), (1, 2)];

#[tokio::main]
async fn main() -> Result<(), DuelgridError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let host = InMemoryHost::new();
    let mut registry = SessionRegistry::new(host.clone(), GameConfig::default());

    // Pin the coin so the scripted moves always line up with the turn order.
    let channel = registry
        .open_session_with_coin(Box::new(FixedCoin(PlayerSlot::First)))
        .await?;
    println!("session opened on {channel}");

    for user in [UserId(1), UserId(2)] {
        registry.dispatch(HostEvent::Join { channel, user }).await?;
    }

    for (user, cell) in MOVES {
        if let Some(to_move) =
            registry.session(&channel).and_then(Session::current_user)
        {
            println!("{to_move} to move, picks cell {cell}");
        }
        registry
            .dispatch(HostEvent::ControlActivated {
                channel,
                user: UserId(user),
                control: ControlId::cell(cell),
            })
            .await?;
    }

    let session = registry.session(&channel).expect("session is live");
    println!(
        "match over: phase={}, remaining={}",
        session.phase(),
        session.board().remaining()
    );

    println!("\nhost operation log:");
    for (index, op) in host.ops().await.iter().enumerate() {
        match op {
            HostOp::ChannelCreated { channel } => {
                println!("{index:>3}. channel {channel} created");
            }
            HostOp::MessageSent { message, content, .. } => {
                println!(
                    "{index:>3}. sent {message}: {:?} ({} controls)",
                    content.text,
                    content.controls.len()
                );
            }
            HostOp::MessageEdited { message, .. } => {
                println!("{index:>3}. edited {message} (full re-render)");
            }
            HostOp::ControlReplaced { message, control, .. } => {
                println!(
                    "{index:>3}. replaced control {} in {message}",
                    control.id
                );
            }
            HostOp::MessageDeleted { message, .. } => {
                println!("{index:>3}. deleted {message}");
            }
            HostOp::MemberAdded { user, silent, .. } => {
                println!("{index:>3}. added {user} (silent: {silent})");
            }
            HostOp::MemberRemoved { user, .. } => {
                println!("{index:>3}. removed {user}");
            }
            HostOp::PrivateSent { user, text } => {
                println!("{index:>3}. private to {user}: {text:?}");
            }
        }
    }

    Ok(())
}
