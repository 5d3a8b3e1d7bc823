use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn test_get_info() {
    init_tracing();

    let server = TestServer::start().await;

    let response = reqwest::get(server.http_url("/api/v1/info")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
