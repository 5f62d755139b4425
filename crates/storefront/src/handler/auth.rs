use crate::{
    abstract_trait::DynAuthClient,
    domain::{
        requests::auth::{LoginRequest, RegisterRequest},
        response::{
            api::ApiResponse,
            auth::{LoginResponse, LogoutResponse, RegisterResponse, SessionUser},
        },
    },
    middleware::{
        jwt::{TOKEN_COOKIE, auth_middleware},
        session::{SessionContext, SessionManager, session_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    abstract_trait::DynJwtService,
    errors::{ErrorResponse, HttpError},
    model::{Role, Session},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa_axum::router::OpenApiRouter;

fn token_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 403, description = "Account role is not supported", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_handler(
    Extension(auth): Extension<DynAuthClient>,
    Extension(jwt): Extension<DynJwtService>,
    Extension(sessions): Extension<SessionManager>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user = auth.login(&body.email, &body.password).await?;

    let Some(role) = Role::parse(&user.role) else {
        warn!("User {} has unsupported role '{}'", user.id, user.role);
        return Err(HttpError::Forbidden("Unsupported role".into()));
    };

    let session = Session::new(user.id, user.email.clone(), role);
    if !sessions.start(&session).await {
        return Err(HttpError::ServiceUnavailable(
            "Unable to start your session, please try again".into(),
        ));
    }

    let token = jwt.generate_token(user.id).map_err(|e| {
        error!("Failed to sign token for user {}: {e}", user.id);
        HttpError::Internal("Unable to login".into())
    })?;

    info!("User {} logged in as {role}", user.id);

    let response = LoginResponse {
        token: token.clone(),
        redirect: user.redirect_path().to_string(),
        user: SessionUser {
            id: user.id,
            email: user.email,
            role,
        },
    };

    Ok((
        jar.add(token_cookie(token)),
        Json(ApiResponse::success("Login successful! Redirecting…", response)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<RegisterResponse>),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register_handler(
    Extension(auth): Extension<DynAuthClient>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user = auth.register(&body.into()).await?;

    let redirect = Role::parse(&user.role)
        .map(|role| role.login_path())
        .unwrap_or_else(|| "/login".to_string());
    let message = if user.message.is_empty() {
        "Registration successful".to_string()
    } else {
        user.message.clone()
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            message,
            RegisterResponse { user, redirect },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session", body = ApiResponse<Session>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn session_handler(
    Extension(ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Session is active", ctx.session)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<LogoutResponse>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn logout_handler(
    Extension(ctx): Extension<SessionContext>,
    jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    if !ctx.clear().await {
        warn!("Session of user {} was already gone", ctx.session.user_id);
    }

    let removal = Cookie::build(TOKEN_COOKIE).path("/").build();

    Ok((
        jar.remove(removal),
        Json(ApiResponse::success(
            "Logged out",
            LogoutResponse {
                redirect: ctx.session.role.login_path(),
            },
        )),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/register", post(register_handler))
        .layer(Extension(app_state.di_container.auth_client.clone()))
        .layer(Extension(app_state.sessions.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/auth/session", get(session_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.sessions.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}
