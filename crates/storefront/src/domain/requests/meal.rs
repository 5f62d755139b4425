use serde::{Deserialize, Serialize};
use shared::model::PriceValue;
use utoipa::ToSchema;
use validator::Validate;

/// New meal as typed into the add-meal form. `price` may arrive as text.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateMealRequest {
    #[validate(length(max = 120))]
    pub title: String,

    #[validate(length(max = 500))]
    pub description: String,

    #[serde(default)]
    #[schema(value_type = String, example = "12.50")]
    pub price: PriceValue,

    #[serde(default)]
    pub image_data: Option<String>,
}
