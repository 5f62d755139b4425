use serde::{Deserialize, Serialize};
use shared::{
    model::{EaterProfile, MakerListing, MakerProfile, Meal, Order, OrderTab, Review},
    summary::OrderSummary,
};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct MakerHomeView {
    pub greeting: String,
    pub meals: Vec<Meal>,
    pub meals_error: Option<String>,
    pub summary: OrderSummary,
    pub summary_error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct MakerOrdersView {
    pub greeting: String,
    pub orders: Vec<Order>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct MakerReviewsView {
    pub greeting: String,
    pub reviews: Vec<Review>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct MakerProfileView {
    pub profile: MakerProfile,
    pub profile_error: Option<String>,
    /// Set only when the profile came from the API rather than a fallback.
    #[serde(skip)]
    pub loaded: bool,
    pub summary: OrderSummary,
    pub summary_error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EaterHomeView {
    pub greeting: String,
    pub display_name: String,
    pub meals: Vec<Meal>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EaterMakersView {
    pub display_name: String,
    pub makers: Vec<MakerListing>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct MakerMealsView {
    pub maker_id: i64,
    pub meals: Vec<Meal>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EaterOrdersView {
    pub tab: OrderTab,
    pub orders: Vec<Order>,
    pub active_count: usize,
    pub completed_count: usize,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EaterProfileView {
    pub headline: String,
    pub profile: EaterProfile,
    pub error: Option<String>,
    #[serde(skip)]
    pub loaded: bool,
}
