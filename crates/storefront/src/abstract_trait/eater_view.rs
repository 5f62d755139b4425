use crate::domain::{
    requests::{order::PlaceOrderRequest, review::ReviewRequest},
    response::views::{
        EaterHomeView, EaterMakersView, EaterOrdersView, EaterProfileView, MakerMealsView,
    },
};
use async_trait::async_trait;
use shared::{
    errors::HttpError,
    model::{EaterProfile, Order, OrderTab, Session},
};
use std::sync::Arc;

pub type DynEaterViewService = Arc<dyn EaterViewServiceTrait + Send + Sync>;

#[async_trait]
pub trait EaterViewServiceTrait {
    async fn home(&self, session: &Session) -> EaterHomeView;
    async fn makers(&self, session: &Session) -> EaterMakersView;
    async fn maker_meals(&self, maker_id: i64) -> MakerMealsView;
    async fn place_order(&self, session: &Session, req: &PlaceOrderRequest)
    -> Result<Order, HttpError>;
    async fn orders(&self, session: &Session, tab: OrderTab) -> EaterOrdersView;
    async fn review(
        &self,
        eater_id: i64,
        order_id: i64,
        req: &ReviewRequest,
    ) -> Result<Order, HttpError>;
    async fn profile(&self, session: &Session) -> EaterProfileView;
    async fn save_profile(
        &self,
        eater_id: i64,
        profile: &EaterProfile,
    ) -> Result<EaterProfile, HttpError>;
}
