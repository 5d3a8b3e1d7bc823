use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

// The hub must not reserialize payloads: spacing, key order, and unicode
// all survive the round trip through the forwarder.
#[tokio::test]
async fn test_payload_bytes_are_untouched() {
    init_tracing();

    let server = TestServer::start().await;
    let room_id = server.seed_room().await;

    let mut p1 = TestClient::connect(&server.ws_url(room_id)).await;
    p1.read_preamble().await;

    let mut p2 = TestClient::connect(&server.ws_url(room_id)).await;
    let (p2_id, _) = p2.read_preamble().await;
    p1.read_envelope().await; // new-peer for p2

    let payload = "{ \"z\" : \"first\",  \"a\":[1,  2 ,3],\"note\":\"\\u00fcber\" }";
    p1.send_signal(p2_id, payload).await;

    let signal = p2.read_envelope().await;
    assert_eq!(signal.payload.unwrap().get(), payload);
}
