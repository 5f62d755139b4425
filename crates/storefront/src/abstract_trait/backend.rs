use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynBackendHealth = Arc<dyn BackendHealthTrait + Send + Sync>;

#[async_trait]
pub trait BackendHealthTrait {
    async fn health(&self) -> Result<serde_json::Value, ClientError>;
}
