use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i64,
    pub maker_id: i64,
    pub eater_id: i64,
    pub order_id: i64,
    pub order_code: String,
    pub eater_name: String,
    pub meal_name: String,
    pub image_data: String,
    pub rating: i32,
    pub comment: String,
    #[serde(default)]
    pub reply: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// The review as embedded in an eater's order listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewSnippet {
    pub review_id: i64,
    pub rating: i32,
    pub comment: String,
    #[serde(default)]
    pub reply: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReview {
    pub order_id: i64,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewReply {
    pub reply: String,
}
