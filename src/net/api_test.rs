use super::*;

#[test]
fn default_client_targets_api_with_local_fallback() {
    let client = ApiClient::default();
    assert_eq!(client.base_url(), "/api");
    assert_eq!(client, ApiClient::new("/api", "http://localhost:5000/api"));
}

#[test]
fn join_url_handles_separator_combinations() {
    assert_eq!(join_url("/api", "/chat"), "/api/chat");
    assert_eq!(join_url("/api/", "chat"), "/api/chat");
    assert_eq!(join_url("http://localhost:5000/api", "/analytics/summary"),
        "http://localhost:5000/api/analytics/summary");
    assert_eq!(join_url("/api", "analytics/openai-log/7"), "/api/analytics/openai-log/7");
}

#[test]
fn errors_format_for_logs() {
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
    assert_eq!(ApiError::Auth.to_string(), "unauthorized");
    assert_eq!(ApiError::Server(503).to_string(), "server error: status 503");
    assert_eq!(
        ApiError::Parse("missing field".to_owned()).to_string(),
        "malformed response: missing field"
    );
}
