#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wardrobe_client::{
    ClientConfig, ClientError, Method, RequestOptions, StoredSession, UnauthorizedEvent,
    WardrobeClient,
};
use wardrobe_types::auth::LoginRequest;
use wardrobe_types::clothing::ClothingItemQuery;
use wardrobe_types::envelope::ApiEnvelope;
use wardrobe_types::user::ChangePasswordRequest;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WardrobeClient {
    WardrobeClient::new(ClientConfig::new(server.uri())).expect("client should build")
}

async fn seed_session(client: &WardrobeClient, token: &str) {
    client
        .session_store()
        .save(&StoredSession::new(token, Some("carol".to_string())))
        .await
        .expect("seeding the session store");
}

fn profile_body() -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "message": "success",
        "data": {
            "id": 1,
            "username": "carol",
            "email": "carol@example.com",
            "height": null,
            "weight": null
        }
    })
}

#[tokio::test]
async fn test_bearer_header_attached_from_store() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    seed_session(&client, "tok-abc").await;

    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client.get_profile().await.expect("authenticated request");
    assert_eq!(profile.username, "carol");
}

#[tokio::test]
async fn test_public_endpoint_sends_no_credential() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    seed_session(&client, "tok-abc").await;

    Mock::given(method("GET"))
        .and(path("/api/public/clothing/categories/tree"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "success",
            "data": [{"id": 1, "name": "Tops", "parent_id": null}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tree = client.category_tree().await.expect("public request");
    assert_eq!(tree.len(), 1);

    let requests = server.received_requests().await.expect("request recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "skip_auth request must not carry the bearer token"
    );
}

#[tokio::test]
async fn test_envelope_passthrough_unchanged() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "pong",
            "data": {"n": 5}
        })))
        .mount(&server)
        .await;

    let envelope = client
        .request(Method::GET, "/api/ping", RequestOptions::public())
        .await
        .expect("enveloped response");

    assert_eq!(
        envelope,
        ApiEnvelope {
            code: 200,
            message: "pong".to_string(),
            data: Some(serde_json::json!({"n": 5})),
        }
    );
}

#[tokio::test]
async fn test_unwrapped_json_body_synthesizes_envelope() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Some routes answer with bare payloads instead of the envelope.
    let bare = serde_json::json!({"temperature": 25, "condition": "sunny"});
    Mock::given(method("GET"))
        .and(path("/api/weather/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bare.clone()))
        .mount(&server)
        .await;

    let envelope = client
        .request(Method::GET, "/api/weather/current", RequestOptions::default())
        .await
        .expect("synthesized envelope");

    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.message, "success");
    assert_eq!(envelope.data, Some(bare));
}

#[tokio::test]
async fn test_plain_text_success_synthesized() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong from server!"))
        .mount(&server)
        .await;

    let pong: String = client.get("/api/ping").await.expect("text payload");
    assert_eq!(pong, "pong from server!");
}

#[tokio::test]
async fn test_unauthorized_fires_handler_once() {
    let server = MockServer::start().await;
    let count = Arc::new(AtomicUsize::new(0));
    let seen: Arc<Mutex<Option<UnauthorizedEvent>>> = Arc::new(Mutex::new(None));
    let client = {
        let count = Arc::clone(&count);
        let seen = Arc::clone(&seen);
        client_for(&server).on_unauthorized(move |event| {
            count.fetch_add(1, Ordering::SeqCst);
            *seen.lock().expect("event slot") = Some(event.clone());
        })
    };
    seed_session(&client, "tok-stale").await;

    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": 401,
            "message": "invalid token"
        })))
        .mount(&server)
        .await;

    let err = client.get_profile().await.expect_err("401 must reject");
    assert_eq!(count.load(Ordering::SeqCst), 1, "handler must fire exactly once");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "invalid token");

    let event = seen.lock().expect("event slot").clone().expect("handler saw the event");
    assert_eq!(event.path, "/api/user/profile");
    assert_eq!(event.status, 401);
    assert_eq!(event.code, 401);
}

#[tokio::test]
async fn test_unauthorized_without_handler_still_rejects() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": 401,
            "message": "invalid token"
        })))
        .mount(&server)
        .await;

    let err = client.get_profile().await.expect_err("401 must reject");
    assert!(matches!(err, ClientError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_http_error_with_envelope_body() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/clothing/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "code": 5001,
            "message": "storage unavailable"
        })))
        .mount(&server)
        .await;

    let err = client.clothing_stats().await.expect_err("500 must reject");
    match err {
        ClientError::Api { status, code, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(code, 5001);
            assert_eq!(message, "storage unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_with_text_body() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such route"))
        .mount(&server)
        .await;

    let err = client.get_profile().await.expect_err("404 must reject");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "no such route");
}

#[tokio::test]
async fn test_envelope_error_under_http_200() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 1001,
            "message": "username already taken"
        })))
        .mount(&server)
        .await;

    let request =
        wardrobe_types::auth::RegisterRequest::new("carol", "secret1", "carol@example.com");
    let err = client.register(&request).await.expect_err("envelope error must reject");
    match err {
        ClientError::Api { status, code, message, .. } => {
            assert_eq!(status, 200, "transport succeeded, failure is application-level");
            assert_eq!(code, 1001);
            assert_eq!(message, "username already taken");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_without_data_rejects() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "success"
        })))
        .mount(&server)
        .await;

    let err = client.get_profile().await.expect_err("missing data must reject");
    assert!(matches!(err, ClientError::MissingData { .. }));
}

#[tokio::test]
async fn test_login_resolves_token_and_persists_session() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({"username": "a", "password": "b"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "success",
            "data": "tok-123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client.login(&LoginRequest::new("a", "b")).await.expect("login");
    assert_eq!(token, "tok-123");

    let session = client.session().await.expect("store readable").expect("session persisted");
    assert_eq!(session.token, "tok-123");
    assert_eq!(session.username.as_deref(), Some("a"));

    client.logout().await.expect("logout");
    assert_eq!(client.session().await.expect("store readable"), None);
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .and(header("content-type", "text/plain"))
        .and(header("x-client-tag", "wardrobe-web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "pong"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let opts = RequestOptions {
        headers: vec![
            ("content-type".to_string(), "text/plain".to_string()),
            ("x-client-tag".to_string(), "wardrobe-web".to_string()),
        ],
        ..RequestOptions::default()
    };
    client
        .request(Method::GET, "/api/ping", opts)
        .await
        .expect("caller headers must win over defaults");
}

#[tokio::test]
async fn test_list_items_serializes_query() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/clothing/items"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "20"))
        .and(query_param("search", "linen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "success",
            "data": {
                "items": [],
                "total": 0,
                "page": 2,
                "page_size": 20,
                "total_pages": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ClothingItemQuery {
        page: Some(2),
        page_size: Some(20),
        search: Some("linen".to_string()),
        ..ClothingItemQuery::default()
    };
    let page = client.list_items(&query).await.expect("filtered listing");
    assert_eq!(page.page, 2);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_no_content_operation_tolerates_missing_data() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("PUT"))
        .and(path("/api/user/password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "password updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ChangePasswordRequest {
        old_password: "old-secret".to_string(),
        new_password: "new-secret".to_string(),
    };
    client.change_password(&request).await.expect("no-content success");
}

#[tokio::test]
async fn test_validation_short_circuits_before_network() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .login(&LoginRequest::new("", "secret"))
        .await
        .expect_err("empty username must fail validation");
    assert!(matches!(err, ClientError::Validation(_)));

    let requests = server.received_requests().await.expect("request recording enabled");
    assert!(requests.is_empty(), "validation failures must not reach the wire");
}
