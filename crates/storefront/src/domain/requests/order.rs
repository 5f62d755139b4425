use serde::{Deserialize, Serialize};
use shared::model::OrderTab;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct PlaceOrderRequest {
    #[validate(range(min = 1))]
    pub meal_id: i64,

    /// Narrows the meal lookup to one maker's menu.
    #[serde(default)]
    pub maker_id: Option<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct OrdersQuery {
    #[serde(default)]
    #[param(value_type = Option<String>, example = "active")]
    pub tab: Option<OrderTab>,
}
