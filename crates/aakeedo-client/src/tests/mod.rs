//! In-process stand-in for the remote APIs.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use aakeedo_config::http::HttpConfig;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::IntoResponse;

mod wanikani_tests;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub revision: Option<String>,
}

pub(crate) struct Stub {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl Stub {
    pub fn json(body: serde_json::Value) -> Self {
        Self::raw(StatusCode::OK, body.to_string())
    }

    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Serve on an ephemeral port. Returns the base URL (with a `/v1` prefix).
    pub async fn serve(self) -> (String, Arc<Stub>) {
        let stub = Arc::new(self);
        let app = Router::new().fallback(respond).with_state(Arc::clone(&stub));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/v1"), stub)
    }
}

async fn respond(State(stub): State<Arc<Stub>>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    stub.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        authorization: header_str(header::AUTHORIZATION.as_str()),
        revision: header_str("wanikani-revision"),
    });

    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }

    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

pub(crate) fn http_config() -> HttpConfig {
    HttpConfig { timeout_ms: 2_000 }
}

/// Nothing listens on port 1, so connecting fails immediately
pub(crate) const UNREACHABLE_BASE: &str = "http://127.0.0.1:1/v1";
