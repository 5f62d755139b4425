use crate::domain::{
    requests::meal::CreateMealRequest,
    response::views::{MakerHomeView, MakerOrdersView, MakerProfileView, MakerReviewsView},
};
use async_trait::async_trait;
use shared::{
    errors::HttpError,
    model::{MakerProfile, Meal, Order, Review, Session},
};
use std::sync::Arc;

pub type DynMakerViewService = Arc<dyn MakerViewServiceTrait + Send + Sync>;

#[async_trait]
pub trait MakerViewServiceTrait {
    async fn home(&self, session: &Session) -> MakerHomeView;
    async fn add_meal(&self, maker_id: i64, req: &CreateMealRequest) -> Result<Meal, HttpError>;
    async fn orders(&self, session: &Session) -> MakerOrdersView;
    async fn complete_order(&self, maker_id: i64, order_id: i64) -> Result<Order, HttpError>;
    async fn reviews(&self, session: &Session) -> MakerReviewsView;
    async fn reply(&self, maker_id: i64, review_id: i64, reply: &str)
    -> Result<Review, HttpError>;
    async fn profile(&self, session: &Session) -> MakerProfileView;
    async fn save_profile(
        &self,
        maker_id: i64,
        profile: &MakerProfile,
    ) -> Result<MakerProfile, HttpError>;
}
