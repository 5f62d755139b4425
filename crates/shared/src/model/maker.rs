use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MakerListing {
    pub maker_id: i64,
    pub name: String,
    pub location: String,
    pub meal_count: i64,
    #[serde(default)]
    pub featured_meal_name: Option<String>,
    #[serde(default)]
    pub featured_meal_image: Option<String>,
}
