use async_trait::async_trait;
use shared::{
    errors::ClientError,
    model::{CreateReview, Review},
};
use std::sync::Arc;

pub type DynReviewClient = Arc<dyn ReviewClientTrait + Send + Sync>;

#[async_trait]
pub trait ReviewClientTrait {
    async fn list_for_maker(&self, maker_id: i64) -> Result<Vec<Review>, ClientError>;
    async fn create_review(&self, input: &CreateReview) -> Result<Review, ClientError>;
    async fn reply(&self, review_id: i64, reply: &str) -> Result<Review, ClientError>;
}
