use async_trait::async_trait;
use shared::{
    errors::ClientError,
    model::{AuthUser, RegisterUser},
};
use std::sync::Arc;

pub type DynAuthClient = Arc<dyn AuthClientTrait + Send + Sync>;

#[async_trait]
pub trait AuthClientTrait {
    async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ClientError>;
    async fn register(&self, input: &RegisterUser) -> Result<AuthUser, ClientError>;
}
