use crate::{abstract_trait::ReviewClientTrait, service::BackendClient};
use async_trait::async_trait;
use reqwest::Method;
use shared::{
    errors::ClientError,
    model::{CreateReview, Review, ReviewReply},
};

#[derive(Clone)]
pub struct ReviewClientService {
    backend: BackendClient,
}

impl ReviewClientService {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl ReviewClientTrait for ReviewClientService {
    async fn list_for_maker(&self, maker_id: i64) -> Result<Vec<Review>, ClientError> {
        self.backend
            .get(
                "ListReviews",
                "/api/reviews",
                &[("maker_id", maker_id.to_string())],
                "Unable to load reviews",
            )
            .await
    }

    async fn create_review(&self, input: &CreateReview) -> Result<Review, ClientError> {
        self.backend
            .send_json(
                "CreateReview",
                Method::POST,
                "/api/reviews",
                input,
                "Unable to submit review",
            )
            .await
    }

    async fn reply(&self, review_id: i64, reply: &str) -> Result<Review, ClientError> {
        self.backend
            .send_json(
                "ReplyReview",
                Method::PATCH,
                &format!("/api/reviews/{review_id}"),
                &ReviewReply {
                    reply: reply.to_string(),
                },
                "Unable to send reply",
            )
            .await
    }
}
