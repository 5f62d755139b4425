use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub id: i64,
    pub maker_id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMeal {
    pub maker_id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_data: String,
}
