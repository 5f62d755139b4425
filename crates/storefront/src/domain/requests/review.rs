use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Star rating and optional comment. A missing rating means none was picked.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct ReviewRequest {
    #[serde(default)]
    pub rating: Option<i32>,

    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct ReplyRequest {
    #[validate(length(min = 1, max = 500))]
    pub reply: String,
}
