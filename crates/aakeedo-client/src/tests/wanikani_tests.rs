use aakeedo_config::wanikani::WaniKaniConfig;
use aakeedo_types::UserData;
use axum::http::StatusCode;
use serde_json::json;

use super::{Stub, UNREACHABLE_BASE, http_config};
use crate::{FetchError, WaniKaniClient};

fn client(base_url: &str) -> WaniKaniClient {
    WaniKaniClient::new(
        &WaniKaniConfig {
            base_url: format!("{base_url}/"),
            revision: "20170710".to_string(),
        },
        &http_config(),
    )
    .unwrap()
}

fn user_envelope() -> serde_json::Value {
    json!({
        "object": "user",
        "url": "https://api.wanikani.com/v2/user",
        "data_updated_at": "2024-03-02T09:14:51.000000Z",
        "data": {
            "id": "5a6a5234-a392-4a87-8f3f-33342afe8a42",
            "username": "koichi",
            "level": 5,
            "started_at": "2012-05-11T00:52:18.958466Z"
        }
    })
}

#[tokio::test]
async fn test_user_info_sends_auth_headers() {
    let (base, stub) = Stub::json(user_envelope()).serve().await;

    let user = client(&base).user_info("secret-token").await;

    assert_eq!(
        user,
        Some(UserData {
            username: "koichi".to_string(),
            level: 5
        })
    );

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/v1/user");
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer secret-token")
    );
    assert_eq!(requests[0].revision.as_deref(), Some("20170710"));
}

#[tokio::test]
async fn test_missing_token_makes_no_request() {
    let (base, stub) = Stub::json(user_envelope()).serve().await;
    let client = client(&base);

    assert!(client.user_info("").await.is_none());
    assert!(matches!(
        client.try_user_info("").await,
        Err(FetchError::InvalidInput { .. })
    ));
    assert_eq!(stub.hits(), 0);
}

#[tokio::test]
async fn test_unauthorized() {
    let (base, _stub) = Stub::raw(
        StatusCode::UNAUTHORIZED,
        r#"{"error":"Unauthorized. Nice try.","code":401}"#,
    )
    .serve()
    .await;

    match client(&base).try_user_info("wrong").await {
        Err(FetchError::ResponseStatus { status, body }) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body.contains("Nice try"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_envelope() {
    let (base, _stub) = Stub::json(json!({ "object": "user", "data": { "username": "koichi" } }))
        .serve()
        .await;
    assert!(client(&base).user_info("token").await.is_none());

    let mut envelope = user_envelope();
    envelope["data"]["level"] = json!(75);
    let (base, _stub) = Stub::json(envelope).serve().await;
    assert!(matches!(
        client(&base).try_user_info("token").await,
        Err(FetchError::Shape(_))
    ));
}

#[tokio::test]
async fn test_connection_failure() {
    assert!(client(UNREACHABLE_BASE).user_info("token").await.is_none());
}
