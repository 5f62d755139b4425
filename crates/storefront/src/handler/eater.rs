use crate::{
    abstract_trait::DynEaterViewService,
    domain::{
        requests::{
            order::{OrdersQuery, PlaceOrderRequest},
            profile::EaterProfileRequest,
            review::ReviewRequest,
        },
        response::{
            api::ApiResponse,
            views::{
                EaterHomeView, EaterMakersView, EaterOrdersView, EaterProfileView, MakerMealsView,
            },
        },
    },
    middleware::{
        jwt::{RequiredRole, auth_middleware},
        role::role_guard,
        session::{SessionContext, session_middleware},
        submission::submission_guard,
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    errors::{ErrorResponse, HttpError},
    model::{EaterProfile, Order, Profile, Role},
};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/eater/home",
    tag = "Eater",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All meals on offer", body = ApiResponse<EaterHomeView>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Not an eater", body = ErrorResponse)
    )
)]
pub async fn eater_home(
    Extension(service): Extension<DynEaterViewService>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.home(&ctx.session).await;
    Ok((StatusCode::OK, Json(ApiResponse::success("Eater home", view))))
}

#[utoipa::path(
    get,
    path = "/api/eater/makers",
    tag = "Eater",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Makers with a featured meal", body = ApiResponse<EaterMakersView>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn list_makers(
    Extension(service): Extension<DynEaterViewService>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.makers(&ctx.session).await;
    Ok((StatusCode::OK, Json(ApiResponse::success("Makers", view))))
}

#[utoipa::path(
    get,
    path = "/api/eater/makers/{id}/meals",
    tag = "Eater",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Maker ID")),
    responses(
        (status = 200, description = "Meals of one maker", body = ApiResponse<MakerMealsView>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn maker_meals(
    Extension(service): Extension<DynEaterViewService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.maker_meals(id).await;
    Ok((StatusCode::OK, Json(ApiResponse::success("Maker meals", view))))
}

#[utoipa::path(
    post,
    path = "/api/eater/orders",
    tag = "Eater",
    security(("bearer_auth" = [])),
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order confirmed", body = ApiResponse<Order>),
        (status = 404, description = "Meal not found", body = ErrorResponse),
        (status = 409, description = "A submission is already in progress", body = ErrorResponse)
    )
)]
pub async fn place_order(
    Extension(service): Extension<DynEaterViewService>,
    Extension(ctx): Extension<SessionContext>,
    SimpleValidatedJson(body): SimpleValidatedJson<PlaceOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.place_order(&ctx.session, &body).await?;
    let message = format!("Order confirmed! Pickup code: {}", order.order_code);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(message, order)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/eater/orders",
    tag = "Eater",
    security(("bearer_auth" = [])),
    params(OrdersQuery),
    responses(
        (status = 200, description = "Orders on the selected tab", body = ApiResponse<EaterOrdersView>),
        (status = 400, description = "Unknown tab"),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn eater_orders(
    Extension(service): Extension<DynEaterViewService>,
    Extension(ctx): Extension<SessionContext>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service
        .orders(&ctx.session, query.tab.unwrap_or_default())
        .await;
    Ok((StatusCode::OK, Json(ApiResponse::success("Eater orders", view))))
}

#[utoipa::path(
    post,
    path = "/api/eater/orders/{id}/review",
    tag = "Eater",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order ID")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review submitted", body = ApiResponse<Order>),
        (status = 400, description = "No rating, or order not completed", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 409, description = "Review already submitted", body = ErrorResponse)
    )
)]
pub async fn review_order(
    Extension(service): Extension<DynEaterViewService>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<ReviewRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.review(ctx.session.user_id, id, &body).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Thank you for your review!", order)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/eater/profile",
    tag = "Eater",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Eater profile", body = ApiResponse<EaterProfileView>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn eater_profile(
    Extension(service): Extension<DynEaterViewService>,
    Extension(mut ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.profile(&ctx.session).await;

    if view.loaded && !ctx.refresh_profile(Profile::Eater(view.profile.clone())).await {
        warn!("Could not store profile of eater {}", ctx.session.user_id);
    }

    Ok((StatusCode::OK, Json(ApiResponse::success("Eater profile", view))))
}

#[utoipa::path(
    put,
    path = "/api/eater/profile",
    tag = "Eater",
    security(("bearer_auth" = [])),
    request_body = EaterProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<EaterProfile>),
        (status = 400, description = "Invalid profile", body = ErrorResponse)
    )
)]
pub async fn save_eater_profile(
    Extension(service): Extension<DynEaterViewService>,
    Extension(mut ctx): Extension<SessionContext>,
    SimpleValidatedJson(body): SimpleValidatedJson<EaterProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let saved = service
        .save_profile(ctx.session.user_id, &body.into())
        .await?;

    if !ctx.refresh_profile(Profile::Eater(saved.clone())).await {
        warn!("Could not store profile of eater {}", ctx.session.user_id);
    }

    Ok((StatusCode::OK, Json(ApiResponse::success("Profile updated", saved))))
}

pub fn eater_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/eater/home", get(eater_home))
        .route("/api/eater/makers", get(list_makers))
        .route("/api/eater/makers/{id}/meals", get(maker_meals))
        .route("/api/eater/orders", get(eater_orders).post(place_order))
        .route("/api/eater/orders/{id}/review", post(review_order))
        .route(
            "/api/eater/profile",
            get(eater_profile).put(save_eater_profile),
        )
        .route_layer(middleware::from_fn(submission_guard))
        .route_layer(middleware::from_fn(role_guard))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.eater_view_service.clone()))
        .layer(Extension(app_state.in_flight.clone()))
        .layer(Extension(app_state.sessions.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(RequiredRole(Role::Eater)))
}
