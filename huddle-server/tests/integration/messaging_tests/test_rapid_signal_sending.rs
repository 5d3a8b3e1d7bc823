use huddle_core::EnvelopeKind;

use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

// Same-sender ordering: a burst of signals arrives complete and in order.
#[tokio::test]
async fn test_rapid_signal_sending() {
    init_tracing();

    let server = TestServer::start().await;
    let room_id = server.seed_room().await;

    let mut p1 = TestClient::connect(&server.ws_url(room_id)).await;
    let (p1_id, _) = p1.read_preamble().await;

    let mut p2 = TestClient::connect(&server.ws_url(room_id)).await;
    let (p2_id, _) = p2.read_preamble().await;
    p1.read_envelope().await; // new-peer for p2

    for seq in 0..50 {
        p1.send_signal(p2_id, &format!("{{\"seq\":{seq}}}")).await;
    }

    for seq in 0..50 {
        let signal = p2.read_envelope().await;
        assert_eq!(signal.kind, EnvelopeKind::Signal);
        assert_eq!(signal.from, Some(p1_id));
        assert_eq!(signal.payload.unwrap().get(), format!("{{\"seq\":{seq}}}"));
    }
}
