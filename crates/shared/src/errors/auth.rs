use crate::errors::HttpError;
use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token type")]
    InvalidTokenType,
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Jwt(_) => HttpError::Unauthorized("Invalid token".into()),
            AuthError::TokenExpired => HttpError::Unauthorized("Token expired".into()),
            AuthError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),
        }
    }
}
