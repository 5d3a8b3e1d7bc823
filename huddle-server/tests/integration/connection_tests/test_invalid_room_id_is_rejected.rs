use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn test_invalid_room_id_is_rejected() {
    init_tracing();

    let server = TestServer::start().await;

    let response = reqwest::get(server.http_url("/api/v1/ws/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "invalid room ID");
}
