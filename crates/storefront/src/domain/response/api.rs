use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }
}

impl<T> Display for ApiResponse<T>
where
    T: Serialize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data_json = serde_json::to_string(&self.data).map_err(|_| fmt::Error)?;
        write!(
            f,
            "ApiResponse {{ status: {}, message: {}, data: {} }}",
            self.status, self.message, data_json
        )
    }
}
