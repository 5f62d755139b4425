use async_trait::async_trait;
use shared::{
    errors::ClientError,
    model::{CreateMeal, MakerListing, Meal},
};
use std::sync::Arc;

pub type DynMealClient = Arc<dyn MealClientTrait + Send + Sync>;

#[async_trait]
pub trait MealClientTrait {
    async fn list_meals(&self, maker_id: Option<i64>) -> Result<Vec<Meal>, ClientError>;
    async fn create_meal(&self, input: &CreateMeal) -> Result<Meal, ClientError>;
    async fn list_makers(&self) -> Result<Vec<MakerListing>, ClientError>;
}
