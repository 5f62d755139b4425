use serde::{Deserialize, Serialize};
use shared::model::{AuthUser, Role};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub redirect: String,
    pub user: SessionUser,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterResponse {
    pub user: AuthUser,
    pub redirect: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LogoutResponse {
    pub redirect: String,
}
