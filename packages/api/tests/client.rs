//! HTTP-level tests for the API client against a mock server.

use api::{ApiError, Client, NewAccount, ReferenceStatus, Tone};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json() -> serde_json::Value {
    json!({ "id": 1, "name": "A", "email": "a@b.com", "phone": null })
}

#[tokio::test]
async fn login_parses_token_and_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "tok1", "user": user_json() })),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let payload = client.login("a@b.com", "secret1").await.unwrap();

    assert_eq!(payload.access_token, "tok1");
    assert_eq!(payload.user.id, 1);
    assert_eq!(payload.user.name, "A");
}

#[tokio::test]
async fn bearer_header_attached_when_token_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    client.set_token(Some("tok1"));

    let user = client.current_user().await.unwrap();
    assert_eq!(user.email, "a@b.com");
}

#[tokio::test]
async fn server_detail_surfaces_in_unauthorized_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let err = client.login("a@b.com", "wrong").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Unauthorized {
            status: 401,
            message: Some("Invalid credentials".to_string())
        }
    );
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn forbidden_keeps_its_own_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/me"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "detail": "Forbidden" })))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let err = client.my_profile().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Unauthorized {
            status: 403,
            message: Some("Forbidden".to_string())
        }
    );
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn error_status_without_detail_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let err = client.my_profile().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.server_message(), None);
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn connection_failure_maps_to_transport_without_status() {
    // Nothing listens on this port.
    let client = Client::new("http://127.0.0.1:1");
    let err = client.references().await.unwrap_err();

    match err {
        ApiError::Transport { status: None, .. } => {}
        other => panic!("expected status-less transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn register_sends_optional_phone_only_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "name": "A",
            "email": "a@b.com",
            "password": "secret1"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "tok1", "user": user_json() })),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let account = NewAccount {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
        phone: None,
    };
    client.register(&account).await.unwrap();
}

#[tokio::test]
async fn reference_list_parses_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/references/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "r1",
                "landlord_name": "Kim",
                "property_address": "12 Elm St",
                "rental_period": "2023.01 - 2024.12",
                "status": "pending",
                "request_code": "REF-1234"
            },
            {
                "id": "r2",
                "landlord_name": "Lee",
                "property_address": "9 Oak Ave",
                "rental_period": "2021.03 - 2022.12",
                "status": "completed",
                "rating": 5,
                "comment": "Great tenant"
            }
        ])))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let refs = client.references().await.unwrap();

    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].status, ReferenceStatus::Pending);
    assert_eq!(refs[0].request_code.as_deref(), Some("REF-1234"));
    assert_eq!(refs[1].status, ReferenceStatus::Completed);
    assert_eq!(refs[1].rating, Some(5));
}

#[tokio::test]
async fn generate_and_delete_intro() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/generate"))
        .and(body_json(json!({ "tone": "friendly" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "i1",
            "tone": "friendly",
            "content": "Hi, I'm A.",
            "created_at": "2026-01-05T09:00:00Z"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/ai/intros/i1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let intro = client.generate_intro(Tone::Friendly).await.unwrap();
    assert_eq!(intro.id, "i1");
    assert_eq!(intro.tone, Tone::Friendly);

    client.delete_intro("i1").await.unwrap();
}

#[tokio::test]
async fn delete_intro_encodes_the_id_segment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ai/intros/i%2F..%2F1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    client.delete_intro("i/../1").await.unwrap();
}
