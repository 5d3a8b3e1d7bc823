use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

#[tokio::test]
async fn test_room_lifecycle() {
    init_tracing();

    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // Create a room over the API.
    let response = client
        .post(server.http_url("/api/v1/rooms"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let room_id = body["room_id"].as_str().expect("room_id in body").to_owned();

    // The fresh room admits a peer.
    let mut peer =
        TestClient::connect(&format!("ws://{}/api/v1/ws/{}", server.addr, room_id)).await;
    peer.read_preamble().await;
    peer.close().await;

    // Delete it; the record is gone and admission now refuses.
    let response = client
        .delete(server.http_url(&format!("/api/v1/rooms/{room_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = reqwest::get(server.http_url(&format!("/api/v1/ws/{room_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // Deleting twice reports the backend refusal.
    let response = client
        .delete(server.http_url(&format!("/api/v1/rooms/{room_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "something wrong");

    // And a room id that is not a UUID is refused up front.
    let response = client
        .delete(server.http_url("/api/v1/rooms/not-a-uuid"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}
