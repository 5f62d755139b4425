use crate::{
    abstract_trait::DynMakerViewService,
    domain::{
        requests::{meal::CreateMealRequest, profile::MakerProfileRequest, review::ReplyRequest},
        response::{
            api::ApiResponse,
            views::{MakerHomeView, MakerOrdersView, MakerProfileView, MakerReviewsView},
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
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    errors::{ErrorResponse, HttpError},
    model::{MakerProfile, Meal, Order, Profile, Review, Role},
};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/maker/home",
    tag = "Maker",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Meals and today's summary", body = ApiResponse<MakerHomeView>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Not a maker", body = ErrorResponse)
    )
)]
pub async fn maker_home(
    Extension(service): Extension<DynMakerViewService>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.home(&ctx.session).await;
    Ok((StatusCode::OK, Json(ApiResponse::success("Maker home", view))))
}

#[utoipa::path(
    post,
    path = "/api/maker/meals",
    tag = "Maker",
    security(("bearer_auth" = [])),
    request_body = CreateMealRequest,
    responses(
        (status = 201, description = "Meal added", body = ApiResponse<Meal>),
        (status = 400, description = "Missing title, description, price or image", body = ErrorResponse),
        (status = 409, description = "A submission is already in progress", body = ErrorResponse)
    )
)]
pub async fn add_meal(
    Extension(service): Extension<DynMakerViewService>,
    Extension(ctx): Extension<SessionContext>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateMealRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let meal = service.add_meal(ctx.session.user_id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Meal added", meal)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/maker/orders",
    tag = "Maker",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders placed with this maker", body = ApiResponse<MakerOrdersView>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn maker_orders(
    Extension(service): Extension<DynMakerViewService>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.orders(&ctx.session).await;
    Ok((StatusCode::OK, Json(ApiResponse::success("Maker orders", view))))
}

#[utoipa::path(
    post,
    path = "/api/maker/orders/{id}/complete",
    tag = "Maker",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order marked as completed", body = ApiResponse<Order>),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 409, description = "Order already completed", body = ErrorResponse)
    )
)]
pub async fn complete_order(
    Extension(service): Extension<DynMakerViewService>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.complete_order(ctx.session.user_id, id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order marked as completed", order)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/maker/reviews",
    tag = "Maker",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reviews left for this maker", body = ApiResponse<MakerReviewsView>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn maker_reviews(
    Extension(service): Extension<DynMakerViewService>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.reviews(&ctx.session).await;
    Ok((StatusCode::OK, Json(ApiResponse::success("Maker reviews", view))))
}

#[utoipa::path(
    post,
    path = "/api/maker/reviews/{id}/reply",
    tag = "Maker",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Review ID")),
    request_body = ReplyRequest,
    responses(
        (status = 200, description = "Reply sent", body = ApiResponse<Review>),
        (status = 400, description = "Reply is empty or too long", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse)
    )
)]
pub async fn reply_review(
    Extension(service): Extension<DynMakerViewService>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<ReplyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let review = service
        .reply(ctx.session.user_id, id, &body.reply)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Reply sent", review))))
}

#[utoipa::path(
    get,
    path = "/api/maker/profile",
    tag = "Maker",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile and today's income", body = ApiResponse<MakerProfileView>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
pub async fn maker_profile(
    Extension(service): Extension<DynMakerViewService>,
    Extension(mut ctx): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let view = service.profile(&ctx.session).await;

    if view.loaded && !ctx.refresh_profile(Profile::Maker(view.profile.clone())).await {
        warn!("Could not store profile of maker {}", ctx.session.user_id);
    }

    Ok((StatusCode::OK, Json(ApiResponse::success("Maker profile", view))))
}

#[utoipa::path(
    put,
    path = "/api/maker/profile",
    tag = "Maker",
    security(("bearer_auth" = [])),
    request_body = MakerProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<MakerProfile>),
        (status = 400, description = "Invalid profile", body = ErrorResponse)
    )
)]
pub async fn save_maker_profile(
    Extension(service): Extension<DynMakerViewService>,
    Extension(mut ctx): Extension<SessionContext>,
    SimpleValidatedJson(body): SimpleValidatedJson<MakerProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let saved = service
        .save_profile(ctx.session.user_id, &body.into())
        .await?;

    if !ctx.refresh_profile(Profile::Maker(saved.clone())).await {
        warn!("Could not store profile of maker {}", ctx.session.user_id);
    }

    Ok((StatusCode::OK, Json(ApiResponse::success("Profile updated", saved))))
}

pub fn maker_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/maker/home", get(maker_home))
        .route("/api/maker/meals", post(add_meal))
        .route("/api/maker/orders", get(maker_orders))
        .route("/api/maker/orders/{id}/complete", post(complete_order))
        .route("/api/maker/reviews", get(maker_reviews))
        .route("/api/maker/reviews/{id}/reply", post(reply_review))
        .route(
            "/api/maker/profile",
            get(maker_profile).put(save_maker_profile),
        )
        .route_layer(middleware::from_fn(submission_guard))
        .route_layer(middleware::from_fn(role_guard))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.maker_view_service.clone()))
        .layer(Extension(app_state.in_flight.clone()))
        .layer(Extension(app_state.sessions.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(RequiredRole(Role::Maker)))
}
