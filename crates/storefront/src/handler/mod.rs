mod auth;
mod eater;
mod health;
mod maker;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::eater::eater_routes;
pub use self::health::health_routes;
pub use self::maker::maker_routes;

// Meal photos travel inline as data URLs.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_checker_handler,

        auth::login_handler,
        auth::register_handler,
        auth::session_handler,
        auth::logout_handler,

        maker::maker_home,
        maker::add_meal,
        maker::maker_orders,
        maker::complete_order,
        maker::maker_reviews,
        maker::reply_review,
        maker::maker_profile,
        maker::save_maker_profile,

        eater::eater_home,
        eater::list_makers,
        eater::maker_meals,
        eater::place_order,
        eater::eater_orders,
        eater::review_order,
        eater::eater_profile,
        eater::save_eater_profile,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness of the storefront and the AussieEat API"),
        (name = "Auth", description = "Login, registration and session endpoints"),
        (name = "Maker", description = "Maker views and actions"),
        (name = "Eater", description = "Eater views and actions"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    /// Every storefront route plus Swagger UI, without binding a socket.
    pub fn router(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(health_routes(shared_state.clone()))
            .merge(auth_routes(shared_state.clone()))
            .merge(maker_routes(shared_state.clone()))
            .merge(eater_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::router(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        let local_addr = listener.local_addr()?;
        info!("🚀 Storefront running on http://{local_addr}");
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}
