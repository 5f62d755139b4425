use crate::errors::AuthError;
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(&self, user_id: i64) -> Result<String, AuthError>;
    fn verify_token(&self, token: &str) -> Result<i64, AuthError>;
}
