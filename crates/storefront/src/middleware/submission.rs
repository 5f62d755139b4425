use crate::{cache::InFlightGuard, middleware::session::SessionContext};
use axum::{
    Extension, Json,
    body::Body,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;
use tracing::warn;

/// Rejects a second write from the same user to the same resource while the
/// first one is still running.
pub async fn submission_guard(
    Extension(guard): Extension<InFlightGuard>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if req.method() == Method::GET || req.method() == Method::HEAD {
        return Ok(next.run(req).await);
    }

    let user_id = req
        .extensions()
        .get::<SessionContext>()
        .map(|ctx| ctx.session.user_id)
        .or_else(|| req.extensions().get::<i64>().copied());

    let Some(user_id) = user_id else {
        return Ok(next.run(req).await);
    };

    let key = format!("{user_id}:{}:{}", req.method(), req.uri().path());

    let Some(_permit) = guard.try_acquire(key.clone()) else {
        warn!("Duplicate submission rejected: {key}");
        return Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse::error("A submission is already in progress")),
        ));
    };

    Ok(next.run(req).await)
}
