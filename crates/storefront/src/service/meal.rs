use crate::{abstract_trait::MealClientTrait, service::BackendClient};
use async_trait::async_trait;
use reqwest::Method;
use shared::{
    errors::ClientError,
    model::{CreateMeal, MakerListing, Meal},
};

#[derive(Clone)]
pub struct MealClientService {
    backend: BackendClient,
}

impl MealClientService {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl MealClientTrait for MealClientService {
    async fn list_meals(&self, maker_id: Option<i64>) -> Result<Vec<Meal>, ClientError> {
        let query: Vec<(&str, String)> = maker_id
            .map(|id| vec![("maker_id", id.to_string())])
            .unwrap_or_default();

        self.backend
            .get("ListMeals", "/api/meals", &query, "Failed to load meals")
            .await
    }

    async fn create_meal(&self, input: &CreateMeal) -> Result<Meal, ClientError> {
        self.backend
            .send_json(
                "CreateMeal",
                Method::POST,
                "/api/meals",
                input,
                "Unable to add meal",
            )
            .await
    }

    async fn list_makers(&self) -> Result<Vec<MakerListing>, ClientError> {
        self.backend
            .get("ListMakers", "/api/makers", &[], "Failed to load makers")
            .await
    }
}
