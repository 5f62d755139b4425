use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ErrorResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
            redirect: None,
        }
    }

    /// Rejection from an access guard, pointing the caller at the login screen.
    pub fn fail(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            status: "fail".into(),
            message: message.into(),
            redirect: Some(redirect.into()),
        }
    }
}
