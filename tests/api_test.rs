use std::sync::Arc;

use axum::{
    Router, body,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header as upstream_header, method, path, query_param},
};
use zohoproxy::{config::Config, server};

// Helper function to create a test configuration pointed at a stub upstream
fn test_config(upstream: &str) -> Config {
    Config {
        port: 3000,
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://localhost:3000/callback".to_string(),
        accounts_url: upstream.to_string(),
        api_url: upstream.to_string(),
    }
}

fn test_app(upstream: &str) -> Router {
    server::app(Arc::new(test_config(upstream)))
}

async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> axum::http::Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("zoho-oauthtoken", token);
    }
    let req = builder
        .body(match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    app.clone().oneshot(req).await.unwrap()
}

async fn json_body(response: axum::http::Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn login_redirects_to_authorization_url() {
    let app = test_app("https://accounts.zoho.com");

    let response = request(&app, Method::GET, "/login", None, None).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://accounts.zoho.com/oauth/v2/auth?"));
    assert!(location.contains("client_id=test-client-id"));
    assert!(location.contains("redirect_uri=http://localhost:3000/callback"));
    assert!(location.contains("scope=ZohoCRM.modules.contacts.ALL"));
    assert!(location.contains("response_type=code"));
    assert!(location.contains("access_type=offline"));
}

#[tokio::test]
async fn callback_without_code_is_rejected_locally() {
    let upstream = MockServer::start().await;
    let app = test_app(&upstream.uri());

    let response = request(&app, Method::GET, "/callback", None, None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));

    // No token exchange may have been attempted.
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn callback_exchanges_code_for_tokens() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(query_param("grant_type", "authorization_code"))
        .and(query_param("client_id", "test-client-id"))
        .and(query_param("client_secret", "test-client-secret"))
        .and(query_param("code", "test-code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A",
            "refresh_token": "R",
            "expires_in": 3600,
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = test_app(&upstream.uri());

    let response = request(&app, Method::GET, "/callback?code=test-code", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert_eq!(body["access_token"], "A");
    assert_eq!(body["refresh_token"], "R");
}

#[tokio::test]
async fn callback_maps_exchange_failure_to_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_code"})),
        )
        .mount(&upstream)
        .await;
    let app = test_app(&upstream.uri());

    let response = request(&app, Method::GET, "/callback?code=expired", None, None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    // The token endpoint's response is not exposed to the caller.
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn contacts_relay_upstream_body_verbatim() {
    let contacts = json!({
        "data": [
            {"id": "1", "First_Name": "Jane", "Last_Name": "Doe"},
            {"id": "2", "First_Name": "John", "Last_Name": "Smith"},
        ],
        "info": {"count": 2, "more_records": false},
    });

    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/Contacts"))
        .and(query_param("fields", "First_Name,Last_Name,id"))
        .and(upstream_header("Authorization", "Zoho-oauthtoken T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contacts.clone()))
        .mount(&upstream)
        .await;
    let app = test_app(&upstream.uri());

    let response = request(&app, Method::GET, "/contacts", Some("T"), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, contacts);
}

#[tokio::test]
async fn contacts_repeat_calls_yield_identical_responses() {
    let contacts = json!({"data": [{"id": "1", "First_Name": "Jane", "Last_Name": "Doe"}]});

    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/Contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contacts.clone()))
        .expect(2)
        .mount(&upstream)
        .await;
    let app = test_app(&upstream.uri());

    let first = request(&app, Method::GET, "/contacts", Some("T"), None).await;
    let second = request(&app, Method::GET, "/contacts", Some("T"), None).await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(json_body(first).await, json_body(second).await);
}

#[tokio::test]
async fn contacts_failure_embeds_upstream_detail() {
    let zoho_error = json!({"code": "INVALID_TOKEN", "message": "invalid oauth token"});

    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/Contacts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(zoho_error.clone()))
        .mount(&upstream)
        .await;
    let app = test_app(&upstream.uri());

    let response = request(&app, Method::GET, "/contacts", Some("bad"), None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(body["details"], zoho_error);
}

#[tokio::test]
async fn create_contact_without_names_is_rejected_locally() {
    let upstream = MockServer::start().await;
    let app = test_app(&upstream.uri());

    let response = request(
        &app,
        Method::POST,
        "/contact/create",
        Some("T"),
        Some(json!({})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_contact_with_blank_name_is_rejected_locally() {
    let upstream = MockServer::start().await;
    let app = test_app(&upstream.uri());

    let response = request(
        &app,
        Method::POST,
        "/contact/create",
        Some("T"),
        Some(json!({"first_name": "  ", "last_name": "Doe"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_contact_forwards_envelope_and_relays_created_records() {
    let created = json!([{"id": "1", "First_Name": "Jane", "Last_Name": "Doe"}]);

    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/Contacts"))
        .and(upstream_header("Authorization", "Zoho-oauthtoken T"))
        .and(body_json(json!({
            "data": [{"First_Name": "Jane", "Last_Name": "Doe"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": created.clone()})))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = test_app(&upstream.uri());

    let response = request(
        &app,
        Method::POST,
        "/contact/create",
        Some("T"),
        Some(json!({"first_name": "Jane", "last_name": "Doe"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn create_contact_failure_embeds_upstream_detail() {
    let zoho_error = json!({"code": "MANDATORY_NOT_FOUND", "status": "error"});

    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/Contacts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(zoho_error.clone()))
        .mount(&upstream)
        .await;
    let app = test_app(&upstream.uri());

    let response = request(
        &app,
        Method::POST,
        "/contact/create",
        Some("T"),
        Some(json!({"first_name": "Jane", "last_name": "Doe"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["details"], zoho_error);
}

#[tokio::test]
async fn health_reports_ok_and_version() {
    let app = test_app("https://accounts.zoho.com");

    let response = request(&app, Method::GET, "/health", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
