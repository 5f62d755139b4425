use serde::{Deserialize, Serialize};
use shared::model::{RegisterUser, Role};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[serde(default = "default_role")]
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}

fn default_role() -> String {
    Role::Eater.as_str().to_string()
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    match Role::parse(role) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("role").with_message("role must be eater or maker".into())),
    }
}

impl From<RegisterRequest> for RegisterUser {
    fn from(value: RegisterRequest) -> Self {
        let role = Role::parse(&value.role).unwrap_or(Role::Eater);
        RegisterUser {
            email: value.email,
            password: value.password,
            role: role.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_defaults_to_eater_and_normalizes_role() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@b.co","password":"longenough"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(RegisterUser::from(req).role, "eater");

        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@b.co","password":"longenough","role":" Maker "}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(RegisterUser::from(req).role, "maker");
    }

    #[test]
    fn unknown_role_fails_validation() {
        let req = RegisterRequest {
            email: "a@b.co".into(),
            password: "longenough".into(),
            role: "admin".into(),
        };
        assert!(req.validate().is_err());
    }
}
