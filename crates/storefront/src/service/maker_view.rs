use crate::{
    abstract_trait::{
        DynMealClient, DynOrderClient, DynOrderSummaryService, DynProfileClient, DynReviewClient,
        MakerViewServiceTrait,
    },
    domain::{
        requests::meal::CreateMealRequest,
        response::views::{MakerHomeView, MakerOrdersView, MakerProfileView, MakerReviewsView},
    },
    service::within_deadline,
};
use async_trait::async_trait;
use shared::{
    errors::HttpError,
    model::{CreateMeal, MakerProfile, Meal, Order, OrderStatus, Review, Session},
};
use std::time::Duration;
use tracing::{error, info};

const MEALS_ERROR: &str = "Failed to load meals";
const SUMMARY_ERROR: &str = "Failed to load orders summary";
const ORDERS_ERROR: &str = "Unable to load orders";
const REVIEWS_ERROR: &str = "Unable to load reviews";
const PROFILE_ERROR: &str = "Unable to load profile";
const INCOME_ERROR: &str = "Unable to load today's income";

#[derive(Clone)]
pub struct MakerViewService {
    meals: DynMealClient,
    orders: DynOrderClient,
    reviews: DynReviewClient,
    profiles: DynProfileClient,
    summary: DynOrderSummaryService,
    deadline: Duration,
}

impl MakerViewService {
    pub fn new(
        meals: DynMealClient,
        orders: DynOrderClient,
        reviews: DynReviewClient,
        profiles: DynProfileClient,
        summary: DynOrderSummaryService,
        deadline: Duration,
    ) -> Self {
        Self {
            meals,
            orders,
            reviews,
            profiles,
            summary,
            deadline,
        }
    }
}

#[async_trait]
impl MakerViewServiceTrait for MakerViewService {
    async fn home(&self, session: &Session) -> MakerHomeView {
        let maker_id = session.user_id;

        let (meals, summary) = tokio::join!(
            within_deadline(self.deadline, self.meals.list_meals(Some(maker_id))),
            self.summary.summary_for_maker(maker_id),
        );

        let (meals, meals_error) = match meals {
            Ok(meals) => (meals, None),
            Err(e) => {
                error!("Maker {maker_id} meals failed: {e}");
                (Vec::new(), Some(MEALS_ERROR.to_string()))
            }
        };

        let (summary, summary_error) = match summary {
            Ok(summary) => (summary, None),
            Err(e) => {
                error!("Maker {maker_id} summary failed: {e}");
                (Default::default(), Some(SUMMARY_ERROR.to_string()))
            }
        };

        MakerHomeView {
            greeting: session.greeting(),
            meals,
            meals_error,
            summary,
            summary_error,
        }
    }

    async fn add_meal(&self, maker_id: i64, req: &CreateMealRequest) -> Result<Meal, HttpError> {
        let image_data = req
            .image_data
            .as_deref()
            .filter(|data| !data.trim().is_empty())
            .ok_or_else(|| HttpError::BadRequest("Please add an image for this meal.".into()))?;

        let title = req.title.trim();
        if title.is_empty() {
            return Err(HttpError::BadRequest("Title is required".into()));
        }

        let description = req.description.trim();
        if description.is_empty() {
            return Err(HttpError::BadRequest("Description is required".into()));
        }

        let price = req
            .price
            .finite()
            .filter(|price| *price > 0.0)
            .ok_or_else(|| HttpError::BadRequest("Price must be greater than zero".into()))?;

        let meal = self
            .meals
            .create_meal(&CreateMeal {
                maker_id,
                title: title.to_string(),
                description: description.to_string(),
                price,
                image_data: image_data.to_string(),
            })
            .await?;

        info!("Maker {maker_id} added meal {}", meal.id);
        Ok(meal)
    }

    async fn orders(&self, session: &Session) -> MakerOrdersView {
        let maker_id = session.user_id;

        let (orders, error) =
            match within_deadline(self.deadline, self.orders.list_for_maker(maker_id)).await {
                Ok(orders) => (orders, None),
                Err(e) => {
                    error!("Maker {maker_id} orders failed: {e}");
                    (Vec::new(), Some(ORDERS_ERROR.to_string()))
                }
            };

        MakerOrdersView {
            greeting: session.greeting(),
            orders,
            error,
        }
    }

    async fn complete_order(&self, maker_id: i64, order_id: i64) -> Result<Order, HttpError> {
        let orders = self.orders.list_for_maker(maker_id).await?;

        let order = orders
            .into_iter()
            .find(|order| order.id == order_id)
            .ok_or_else(|| HttpError::NotFound("Order not found".into()))?;

        if order.status.is_completed() {
            return Err(HttpError::Conflict("Order already completed".into()));
        }

        let updated = self
            .orders
            .update_status(order_id, OrderStatus::Completed)
            .await?;

        info!("Maker {maker_id} completed order {}", updated.order_code);
        Ok(updated)
    }

    async fn reviews(&self, session: &Session) -> MakerReviewsView {
        let maker_id = session.user_id;

        let (reviews, error) =
            match within_deadline(self.deadline, self.reviews.list_for_maker(maker_id)).await {
                Ok(reviews) => (reviews, None),
                Err(e) => {
                    error!("Maker {maker_id} reviews failed: {e}");
                    (Vec::new(), Some(REVIEWS_ERROR.to_string()))
                }
            };

        MakerReviewsView {
            greeting: session.greeting(),
            reviews,
            error,
        }
    }

    async fn reply(
        &self,
        maker_id: i64,
        review_id: i64,
        reply: &str,
    ) -> Result<Review, HttpError> {
        let reviews = self.reviews.list_for_maker(maker_id).await?;

        if !reviews.iter().any(|review| review.id == review_id) {
            return Err(HttpError::NotFound("Review not found".into()));
        }

        Ok(self.reviews.reply(review_id, reply).await?)
    }

    async fn profile(&self, session: &Session) -> MakerProfileView {
        let maker_id = session.user_id;

        let (profile, summary) = tokio::join!(
            within_deadline(self.deadline, self.profiles.maker_profile(maker_id)),
            self.summary.summary_for_maker(maker_id),
        );

        let (profile, profile_error, loaded) = match profile {
            Ok(profile) => (profile, None, true),
            Err(e) => {
                error!("Maker {maker_id} profile failed: {e}");
                let fallback = session
                    .profile
                    .as_ref()
                    .and_then(|profile| profile.as_maker())
                    .cloned()
                    .unwrap_or_default();
                (fallback, Some(PROFILE_ERROR.to_string()), false)
            }
        };

        let (summary, summary_error) = match summary {
            Ok(summary) => (summary, None),
            Err(e) => {
                error!("Maker {maker_id} income failed: {e}");
                (Default::default(), Some(INCOME_ERROR.to_string()))
            }
        };

        MakerProfileView {
            profile,
            profile_error,
            loaded,
            summary,
            summary_error,
        }
    }

    async fn save_profile(
        &self,
        maker_id: i64,
        profile: &MakerProfile,
    ) -> Result<MakerProfile, HttpError> {
        Ok(self.profiles.save_maker_profile(maker_id, profile).await?)
    }
}
