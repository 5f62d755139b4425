use serde::{Deserialize, Serialize};
use shared::model::{EaterProfile, MakerProfile};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct MakerProfileRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 64))]
    pub phone: String,

    #[validate(length(min = 1, max = 64))]
    pub country: String,

    #[validate(length(min = 1, max = 500))]
    pub location: String,
}

impl From<MakerProfileRequest> for MakerProfile {
    fn from(value: MakerProfileRequest) -> Self {
        MakerProfile {
            name: value.name,
            email: value.email,
            phone: value.phone,
            country: value.country,
            location: value.location,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct EaterProfileRequest {
    #[validate(length(min = 1, max = 120))]
    pub display_name: String,

    #[validate(length(max = 64))]
    pub phone: Option<String>,

    #[validate(length(max = 120))]
    pub favorite_cuisine: Option<String>,

    #[validate(length(max = 500))]
    pub note: Option<String>,
}

impl From<EaterProfileRequest> for EaterProfile {
    fn from(value: EaterProfileRequest) -> Self {
        EaterProfile {
            display_name: value.display_name,
            phone: value.phone,
            favorite_cuisine: value.favorite_cuisine,
            note: value.note,
        }
    }
}
