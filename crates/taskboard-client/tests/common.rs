use taskboard_client::{ApiClient, ApiConfig, MemorySessionStore};
use wiremock::MockServer;

/// Client pointed at a mock server, with an empty session.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ApiClient<MemorySessionStore> {
    let config = ApiConfig::for_origin(&server.uri()).unwrap();
    ApiClient::new(config, MemorySessionStore::new()).unwrap()
}

/// Client pointed at a mock server, already logged in with `token`.
#[allow(dead_code)]
pub fn logged_in_client(server: &MockServer, token: &str) -> ApiClient<MemorySessionStore> {
    let config = ApiConfig::for_origin(&server.uri()).unwrap();
    ApiClient::new(config, MemorySessionStore::with_token(token)).unwrap()
}

/// Task JSON as the API returns it.
#[allow(dead_code)]
pub fn task_json(id: u64, title: &str, status: &str, due_date: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": format!("About {}", title),
        "status": status,
        "due_date": due_date,
        "user_id": 1
    })
}

/// Number of requests the mock server has seen.
#[allow(dead_code)]
pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}
