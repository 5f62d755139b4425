use crate::{abstract_trait::AuthClientTrait, service::BackendClient};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use shared::{
    errors::ClientError,
    model::{AuthUser, RegisterUser},
};
use tracing::info;

#[derive(Clone)]
pub struct AuthClientService {
    backend: BackendClient,
}

impl AuthClientService {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl AuthClientTrait for AuthClientService {
    async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ClientError> {
        info!("Logging in {email}");

        self.backend
            .send_json(
                "Login",
                Method::POST,
                "/api/auth/login",
                &json!({ "email": email, "password": password }),
                "Unable to login",
            )
            .await
    }

    async fn register(&self, input: &RegisterUser) -> Result<AuthUser, ClientError> {
        info!("Registering {} as {}", input.email, input.role);

        self.backend
            .send_json(
                "Register",
                Method::POST,
                "/api/auth/register",
                input,
                "Unable to create account",
            )
            .await
    }
}
