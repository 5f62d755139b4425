use crate::middleware::{jwt::RequiredRole, session::SessionContext};
use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;
use tracing::warn;

pub async fn role_guard(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let Some(RequiredRole(required)) = req.extensions().get::<RequiredRole>().copied() else {
        return Ok(next.run(req).await);
    };

    let actual = req
        .extensions()
        .get::<SessionContext>()
        .map(|ctx| (ctx.session.user_id, ctx.session.role));

    match actual {
        Some((_, role)) if role == required => Ok(next.run(req).await),
        Some((user_id, role)) => {
            warn!("User {user_id} with role {role} tried a {required} route");
            Err((
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::fail(
                    format!("This area is for {required}s only"),
                    required.login_path(),
                )),
            ))
        }
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::fail(
                "Your session has expired, please log in again",
                required.login_path(),
            )),
        )),
    }
}
