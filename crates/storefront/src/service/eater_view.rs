use crate::{
    abstract_trait::{
        DynMealClient, DynOrderClient, DynProfileClient, DynReviewClient, EaterViewServiceTrait,
    },
    domain::{
        requests::{order::PlaceOrderRequest, review::ReviewRequest},
        response::views::{
            EaterHomeView, EaterMakersView, EaterOrdersView, EaterProfileView, MakerMealsView,
        },
    },
    service::within_deadline,
};
use async_trait::async_trait;
use shared::{
    errors::HttpError,
    model::{
        CreateOrder, CreateReview, EaterProfile, Order, OrderTab, ReviewSnippet, Session,
        eater_display_name,
    },
    utils::generate_order_code,
};
use std::time::Duration;
use tracing::{error, info};

const MEALS_ERROR: &str = "Unable to load meals right now.";
const MAKERS_ERROR: &str = "Unable to load makers right now.";
const MAKER_MEALS_ERROR: &str = "Unable to load this maker's meals right now.";
const ORDERS_ERROR: &str = "Unable to load your orders";
const PROFILE_ERROR: &str = "Unable to load profile";
const EMPTY_COMMENT: &str = "No additional comments.";

#[derive(Clone)]
pub struct EaterViewService {
    meals: DynMealClient,
    orders: DynOrderClient,
    reviews: DynReviewClient,
    profiles: DynProfileClient,
    deadline: Duration,
}

impl EaterViewService {
    pub fn new(
        meals: DynMealClient,
        orders: DynOrderClient,
        reviews: DynReviewClient,
        profiles: DynProfileClient,
        deadline: Duration,
    ) -> Self {
        Self {
            meals,
            orders,
            reviews,
            profiles,
            deadline,
        }
    }
}

#[async_trait]
impl EaterViewServiceTrait for EaterViewService {
    async fn home(&self, session: &Session) -> EaterHomeView {
        let (meals, error) =
            match within_deadline(self.deadline, self.meals.list_meals(None)).await {
                Ok(meals) => (meals, None),
                Err(e) => {
                    error!("Eater {} meals failed: {e}", session.user_id);
                    (Vec::new(), Some(MEALS_ERROR.to_string()))
                }
            };

        EaterHomeView {
            greeting: session.greeting(),
            display_name: eater_display_name(&session.email),
            meals,
            error,
        }
    }

    async fn makers(&self, session: &Session) -> EaterMakersView {
        let (makers, error) = match within_deadline(self.deadline, self.meals.list_makers()).await
        {
            Ok(makers) => (makers, None),
            Err(e) => {
                error!("Maker listing failed: {e}");
                (Vec::new(), Some(MAKERS_ERROR.to_string()))
            }
        };

        EaterMakersView {
            display_name: eater_display_name(&session.email),
            makers,
            error,
        }
    }

    async fn maker_meals(&self, maker_id: i64) -> MakerMealsView {
        let (meals, error) =
            match within_deadline(self.deadline, self.meals.list_meals(Some(maker_id))).await {
                Ok(meals) => (meals, None),
                Err(e) => {
                    error!("Meals of maker {maker_id} failed: {e}");
                    (Vec::new(), Some(MAKER_MEALS_ERROR.to_string()))
                }
            };

        MakerMealsView {
            maker_id,
            meals,
            error,
        }
    }

    async fn place_order(
        &self,
        session: &Session,
        req: &PlaceOrderRequest,
    ) -> Result<Order, HttpError> {
        let meals = self.meals.list_meals(req.maker_id).await?;

        let meal = meals
            .into_iter()
            .find(|meal| meal.id == req.meal_id)
            .ok_or_else(|| HttpError::NotFound("Meal not found".into()))?;

        let order_code = generate_order_code().map_err(|e| {
            error!("Order code generation failed: {e}");
            HttpError::Internal("Unable to place order".into())
        })?;

        let order = self
            .orders
            .create_order(&CreateOrder {
                maker_id: meal.maker_id,
                order_code,
                eater_name: eater_display_name(&session.email),
                eater_id: Some(session.user_id),
                meal_name: meal.title,
                image_data: meal.image_data,
                price: meal.price,
            })
            .await?;

        info!(
            "Eater {} placed order {} with maker {}",
            session.user_id, order.order_code, order.maker_id
        );

        Ok(order)
    }

    async fn orders(&self, session: &Session, tab: OrderTab) -> EaterOrdersView {
        let eater_id = session.user_id;

        let (all, error) =
            match within_deadline(self.deadline, self.orders.list_for_eater(eater_id)).await {
                Ok(orders) => (orders, None),
                Err(e) => {
                    error!("Eater {eater_id} orders failed: {e}");
                    (Vec::new(), Some(ORDERS_ERROR.to_string()))
                }
            };

        let completed_count = OrderTab::Completed.filter(&all).len();
        let active_count = all.len() - completed_count;
        let orders = all.into_iter().filter(|order| tab.matches(order)).collect();

        EaterOrdersView {
            tab,
            orders,
            active_count,
            completed_count,
            error,
        }
    }

    async fn review(
        &self,
        eater_id: i64,
        order_id: i64,
        req: &ReviewRequest,
    ) -> Result<Order, HttpError> {
        let rating = req
            .rating
            .filter(|rating| (1..=5).contains(rating))
            .ok_or_else(|| HttpError::BadRequest("Please select a rating.".into()))?;

        let orders = self.orders.list_for_eater(eater_id).await?;

        let mut order = orders
            .into_iter()
            .find(|order| order.id == order_id)
            .ok_or_else(|| HttpError::NotFound("Order not found".into()))?;

        if !order.status.is_completed() {
            return Err(HttpError::BadRequest(
                "Only completed orders can be reviewed".into(),
            ));
        }

        if order.review.is_some() {
            return Err(HttpError::Conflict(
                "Review already submitted for this order".into(),
            ));
        }

        let comment = req
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|comment| !comment.is_empty())
            .unwrap_or(EMPTY_COMMENT);

        let review = self
            .reviews
            .create_review(&CreateReview {
                order_id,
                rating,
                comment: comment.to_string(),
            })
            .await?;

        info!("Eater {eater_id} reviewed order {order_id} with {rating} stars");

        order.review = Some(ReviewSnippet {
            review_id: review.id,
            rating: review.rating,
            comment: review.comment,
            reply: review.reply,
        });

        Ok(order)
    }

    async fn profile(&self, session: &Session) -> EaterProfileView {
        let eater_id = session.user_id;

        let (profile, error, loaded) =
            match within_deadline(self.deadline, self.profiles.eater_profile(eater_id)).await {
                Ok(profile) => (profile, None, true),
                Err(e) => {
                    error!("Eater {eater_id} profile failed: {e}");
                    (
                        EaterProfile::placeholder(session.local_part()),
                        Some(PROFILE_ERROR.to_string()),
                        false,
                    )
                }
            };

        let headline = if profile.display_name.is_empty() {
            session.local_part().to_string()
        } else {
            profile.display_name.clone()
        };

        EaterProfileView {
            headline,
            profile,
            error,
            loaded,
        }
    }

    async fn save_profile(
        &self,
        eater_id: i64,
        profile: &EaterProfile,
    ) -> Result<EaterProfile, HttpError> {
        Ok(self.profiles.save_eater_profile(eater_id, profile).await?)
    }
}
