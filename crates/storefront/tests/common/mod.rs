#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use shared::{
    abstract_trait::DynJwtService,
    model::{Role, Session},
};
use std::{sync::Arc, time::Duration};
use storefront::{
    abstract_trait::DynSessionStore,
    cache::MemorySessionStore,
    config::{Config, SessionBackend},
    handler::AppRouter,
    middleware::session::SessionManager,
    state::AppState,
};
use tower::ServiceExt;
use wiremock::MockServer;

pub struct TestApp {
    pub router: Router,
    pub backend: MockServer,
    pub sessions: SessionManager,
    pub jwt: DynJwtService,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(configure: impl FnOnce(&mut Config)) -> Self {
        let backend = MockServer::start().await;

        let mut config = Config::new(0, "integration-secret", &backend.uri());
        config.session_backend = SessionBackend::Memory;
        config.view_deadline = Duration::from_secs(2);
        configure(&mut config);

        let store = Arc::new(MemorySessionStore::new()) as DynSessionStore;
        let state = AppState::build(&config, store).expect("state should build");

        let sessions = state.sessions.clone();
        let jwt = state.jwt_config.clone();

        Self {
            router: AppRouter::router(state),
            backend,
            sessions,
            jwt,
        }
    }

    /// Starts a session the way a successful login would and returns its token.
    pub async fn login_as(&self, user_id: i64, email: &str, role: Role) -> String {
        let session = Session::new(user_id, email, role);
        assert!(self.sessions.start(&session).await);
        self.jwt.generate_token(user_id).expect("token should sign")
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request("PUT", uri, token, Some(body))).await
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    }
}
