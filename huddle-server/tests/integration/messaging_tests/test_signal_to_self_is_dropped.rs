use huddle_core::EnvelopeKind;

use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

#[tokio::test]
async fn test_signal_to_self_is_dropped() {
    init_tracing();

    let server = TestServer::start().await;
    let room_id = server.seed_room().await;

    let mut p1 = TestClient::connect(&server.ws_url(room_id)).await;
    let (p1_id, _) = p1.read_preamble().await;

    // A peer addressing itself never gets an echo.
    p1.send_signal(p1_id, "{\"loop\":true}").await;
    p1.expect_silence().await;

    let mut p2 = TestClient::connect(&server.ws_url(room_id)).await;
    let (p2_id, _) = p2.read_preamble().await;

    let new_peer = p1.read_envelope().await;
    assert_eq!(new_peer.kind, EnvelopeKind::NewPeer);
    assert_eq!(new_peer.id, Some(p2_id));
}
