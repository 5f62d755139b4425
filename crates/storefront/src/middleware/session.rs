use crate::{abstract_trait::DynSessionStore, middleware::jwt::login_redirect};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use chrono::Duration;
use shared::{
    errors::ErrorResponse,
    model::{Profile, Session},
};
use tracing::warn;

pub fn session_key(user_id: i64) -> String {
    format!("aussieeat.user:{user_id}")
}

/// Where sessions live and how long they last without activity.
#[derive(Clone)]
pub struct SessionManager {
    pub store: DynSessionStore,
    pub ttl: Duration,
}

impl SessionManager {
    pub fn new(store: DynSessionStore, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn start(&self, session: &Session) -> bool {
        self.store
            .create_session(&session_key(session.user_id), session, self.ttl)
            .await
    }

    pub async fn load(&self, user_id: i64) -> Option<SessionContext> {
        let key = session_key(user_id);
        let session = self.store.get_session(&key).await?;

        if !self.store.refresh_session(&key, self.ttl).await {
            warn!("Could not extend session {key}");
        }

        Some(SessionContext {
            store: self.store.clone(),
            key,
            ttl: self.ttl,
            session,
        })
    }
}

/// The caller's session, available to every handler behind [`session_middleware`].
#[derive(Clone)]
pub struct SessionContext {
    store: DynSessionStore,
    key: String,
    ttl: Duration,
    pub session: Session,
}

impl SessionContext {
    pub async fn refresh_profile(&mut self, profile: Profile) -> bool {
        self.session.profile = Some(profile);
        self.store
            .create_session(&self.key, &self.session, self.ttl)
            .await
    }

    pub async fn clear(&self) -> bool {
        self.store.delete_session(&self.key).await
    }
}

pub async fn session_middleware(
    Extension(manager): Extension<SessionManager>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let user_id = match req.extensions().get::<i64>() {
        Some(id) => *id,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::fail(
                    "Missing user_id in request context",
                    login_redirect(&req),
                )),
            ));
        }
    };

    let ctx = match manager.load(user_id).await {
        Some(ctx) => ctx,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::fail(
                    "Your session has expired, please log in again",
                    login_redirect(&req),
                )),
            ));
        }
    };

    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
