use crate::{abstract_trait::JwtServiceTrait, errors::AuthError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

impl Claims {
    pub fn new(user_id: i64, exp: usize, iat: usize, token_type: String) -> Self {
        Claims {
            user_id,
            exp,
            iat,
            token_type,
        }
    }
}

/// Signs the access token handed to the browser after login. The token only
/// carries the user id; everything else lives in the session record.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub access_ttl: Duration,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            access_ttl: Duration::minutes(60),
        }
    }

    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + self.access_ttl).timestamp() as usize;

        let claims = Claims::new(user_id, exp, iat, ACCESS_TOKEN_TYPE.to_string());

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(AuthError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<i64, AuthError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::Jwt(e),
            })?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(AuthError::TokenExpired);
        }

        if token_data.claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(AuthError::InvalidTokenType);
        }

        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(42).unwrap();
        assert_eq!(jwt.verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = JwtConfig::new("one").generate_token(42).unwrap();
        assert!(matches!(
            JwtConfig::new("two").verify_token(&token),
            Err(AuthError::Jwt(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret").with_access_ttl(Duration::minutes(-10));
        let token = jwt.generate_token(7).unwrap();
        assert!(matches!(jwt.verify_token(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn refresh_typed_token_is_rejected() {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims::new(7, now + 600, now, "refresh".into());
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            JwtConfig::new("test-secret").verify_token(&token),
            Err(AuthError::InvalidTokenType)
        ));
    }
}
