use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse, model::Role};
use tracing::debug;

pub const TOKEN_COOKIE: &str = "token";

/// Role a route group is reserved for. Also decides where rejected callers
/// are sent to log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredRole(pub Role);

pub fn login_redirect(req: &Request<Body>) -> String {
    req.extensions()
        .get::<RequiredRole>()
        .map(|RequiredRole(role)| role.login_path())
        .unwrap_or_else(|| "/login".to_string())
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::fail(
                    "You are not logged in, please provide token",
                    login_redirect(&req),
                )),
            ));
        }
    };

    let user_id = match jwt.verify_token(&token) {
        Ok(id) => id,
        Err(e) => {
            debug!("Rejected token: {e}");
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::fail("Invalid token", login_redirect(&req))),
            ));
        }
    };

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
