use std::collections::HashSet;

use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

#[tokio::test]
async fn test_peer_ids_are_unique() {
    init_tracing();

    let server = TestServer::start().await;
    let room_id = server.seed_room().await;

    let mut clients = Vec::new();
    let mut ids = HashSet::new();
    for _ in 0..5 {
        let mut client = TestClient::connect(&server.ws_url(room_id)).await;
        let (peer_id, _) = client.read_preamble().await;
        assert!(ids.insert(peer_id), "peer id {peer_id} handed out twice");
        clients.push(client);
    }
}
