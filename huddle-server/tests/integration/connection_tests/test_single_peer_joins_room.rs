use std::time::Duration;

use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

#[tokio::test]
async fn test_single_peer_joins_room() {
    init_tracing();

    let server = TestServer::start().await;
    let room_id = server.seed_room().await;

    let mut client = TestClient::connect(&server.ws_url(room_id)).await;
    let (_peer_id, existing) = client.read_preamble().await;

    assert!(existing.is_empty(), "first joiner sees an empty room");
    assert!(server.state.registry.contains(&room_id));
    assert_eq!(server.state.registry.len(), 1);

    client.close().await;
    server.wait_for_empty_registry(Duration::from_secs(2)).await;
}
