//! In-process mock of the Hirelink backend.
//!
//! Every request is recorded; responses come from a `(method, path)` table
//! and anything unregistered gets a 404.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use hirelink_lib::models::UserRole;
use hirelink_lib::pages::PageContext;
use hirelink_lib::services::{ApiClient, ClientConfig, Session, SessionManager};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct Inner {
    routes: HashMap<(String, String), (u16, String)>,
    requests: Vec<Recorded>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response.
    pub fn route(self, method: &str, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.inner.lock().unwrap().routes.insert(
            (method.to_string(), path.to_string()),
            (status, body.into()),
        );
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }

    /// Serve on an ephemeral local port and return the base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new().fallback(handle).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn handle(
    State(mock): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let mut inner = mock.inner.lock().unwrap();
    inner.requests.push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match inner.routes.get(&(method.to_string(), uri.path().to_string())) {
        Some((status, body)) => (StatusCode::from_u16(*status).unwrap(), body.clone()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
    })
    .unwrap()
}

pub fn session(role: UserRole) -> Session {
    Session {
        access_token: "test-token".to_string(),
        refresh_token: Some("test-refresh".to_string()),
        user_role: Some(role),
        user_id: Some(1),
    }
}

/// Page context against `base_url`, logged in as `role` (or logged out).
pub fn context(base_url: &str, role: Option<UserRole>) -> PageContext {
    PageContext::new(
        client(base_url),
        SessionManager::in_memory(role.map(session)),
    )
}
