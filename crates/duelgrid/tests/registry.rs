//! Integration tests for event routing and registry-level persistence.

use duelgrid::prelude::*;

fn uid(id: u64) -> UserId {
    UserId(id)
}

fn registry_with_host() -> (InMemoryHost, SessionRegistry<InMemoryHost>) {
    let host = InMemoryHost::new();
    let registry = SessionRegistry::new(host.clone(), GameConfig::default());
    (host, registry)
}

/// Opens a session with a pinned first player and joins U-1 and U-2.
async fn started_session(
    registry: &mut SessionRegistry<InMemoryHost>,
) -> ChannelId {
    let channel = registry
        .open_session_with_coin(Box::new(FixedCoin(PlayerSlot::First)))
        .await
        .unwrap();
    registry
        .dispatch(HostEvent::Join { channel, user: uid(1) })
        .await
        .unwrap();
    registry
        .dispatch(HostEvent::Join { channel, user: uid(2) })
        .await
        .unwrap();
    channel
}

#[tokio::test]
async fn test_join_events_route_to_the_owning_session() {
    let (_host, mut registry) = registry_with_host();
    let channel = started_session(&mut registry).await;

    let session = registry.session(&channel).expect("session is live");
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.players(), [uid(1), uid(2)]);
}

#[tokio::test]
async fn test_sessions_on_different_channels_are_independent() {
    let (_host, mut registry) = registry_with_host();
    let first = started_session(&mut registry).await;
    let second = registry.open_session().await.unwrap();
    registry
        .dispatch(HostEvent::Join { channel: second, user: uid(7) })
        .await
        .unwrap();

    assert_eq!(registry.session_count(), 2);
    assert_eq!(registry.session(&first).unwrap().phase(), Phase::Active);
    assert_eq!(registry.session(&second).unwrap().phase(), Phase::Lobby);
    assert_eq!(registry.session(&second).unwrap().players(), [uid(7)]);
}

#[tokio::test]
async fn test_events_for_unknown_channels_are_dropped() {
    let (host, mut registry) = registry_with_host();
    let before = host.op_count().await;

    registry
        .dispatch(HostEvent::Join { channel: ChannelId(999), user: uid(1) })
        .await
        .unwrap();

    assert!(registry.is_empty());
    assert_eq!(host.op_count().await, before);
}

#[tokio::test]
async fn test_cell_activations_route_as_moves() {
    let (_host, mut registry) = registry_with_host();
    let channel = started_session(&mut registry).await;

    registry
        .dispatch(HostEvent::ControlActivated {
            channel,
            user: uid(1),
            control: ControlId::cell(4),
        })
        .await
        .unwrap();

    let session = registry.session(&channel).unwrap();
    assert_eq!(session.board().cell(4), Cell::Occupied(PlayerSlot::First));
    assert_eq!(session.current(), Some(PlayerSlot::Second));
}

#[tokio::test]
async fn test_leave_control_activation_routes_as_leave() {
    let (_host, mut registry) = registry_with_host();
    let channel = started_session(&mut registry).await;

    registry
        .dispatch(HostEvent::ControlActivated {
            channel,
            user: uid(2),
            control: ControlId::leave(),
        })
        .await
        .unwrap();

    let session = registry.session(&channel).unwrap();
    assert_eq!(session.phase(), Phase::Stale);
    assert_eq!(session.players(), [uid(1)]);
}

#[tokio::test]
async fn test_suspend_all_persists_live_sessions_and_drops_stale_ones() {
    let (_host, mut registry) = registry_with_host();

    // One lobby session worth persisting.
    let lobby = registry.open_session().await.unwrap();
    registry
        .dispatch(HostEvent::Join { channel: lobby, user: uid(1) })
        .await
        .unwrap();

    // One session driven stale via the silent sole-player leave.
    let stale = registry.open_session().await.unwrap();
    registry
        .dispatch(HostEvent::Join { channel: stale, user: uid(2) })
        .await
        .unwrap();
    registry
        .dispatch(HostEvent::Leave { channel: stale, user: uid(2) })
        .await
        .unwrap();

    let bundles = registry.suspend_all();

    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].channel, lobby);
    assert_eq!(bundles[0].players, vec![uid(1)]);
}

#[tokio::test]
async fn test_bundles_survive_the_codec_and_restore_into_a_fresh_registry() {
    let (host, mut registry) = registry_with_host();
    let channel = started_session(&mut registry).await;
    registry
        .dispatch(HostEvent::ControlActivated {
            channel,
            user: uid(1),
            control: ControlId::cell(0),
        })
        .await
        .unwrap();

    // Persist through the codec, as an embedder would.
    let codec = JsonCodec;
    let stored: Vec<Vec<u8>> = registry
        .suspend_all()
        .iter()
        .map(|b| codec.encode(b).unwrap())
        .collect();
    assert_eq!(stored.len(), 1);

    // A later process restores from bytes.
    let mut fresh = SessionRegistry::new(host, GameConfig::default());
    for bytes in &stored {
        let bundle: SessionBundle = codec.decode(bytes).unwrap();
        fresh.restore_session(bundle).unwrap();
    }

    let session = fresh.session(&channel).expect("session restored");
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.board().cell(0), Cell::Occupied(PlayerSlot::First));
    assert_eq!(session.current(), Some(PlayerSlot::Second));
    assert!(session.awaiting_selection());
}
