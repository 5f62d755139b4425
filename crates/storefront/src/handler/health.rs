use crate::{abstract_trait::DynBackendHealth, state::AppState};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Storefront and backend are up"),
        (status = 503, description = "Backend is unreachable")
    ),
    tag = "Health"
)]
pub async fn health_checker_handler(
    Extension(backend): Extension<DynBackendHealth>,
) -> impl IntoResponse {
    match backend.health().await {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "AussieEat storefront is running",
                "data": { "storefront": "ok", "backend": report },
            })),
        ),
        Err(e) => {
            warn!("Backend health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "error",
                    "message": "AussieEat API is unreachable",
                    "data": { "storefront": "ok", "backend": e.to_string() },
                })),
            )
        }
    }
}

pub fn health_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/health", get(health_checker_handler))
        .layer(Extension(app_state.di_container.backend_health.clone()))
}
