//! Bearer-token authentication. Tokens are HS256 JWTs issued by the
//! account service; this API only verifies them.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Recruiter,
    Handler,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub exp: i64,
}

/// Any authenticated user.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: Uuid,
    pub role: Role,
}

/// An authenticated user with the recruiter role; rejects handlers with 403.
#[derive(Debug, Clone, Copy)]
pub struct Recruiter(pub CurrentUser);

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 30;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => debug!("Token rejected: expired"),
                ErrorKind::InvalidSignature => warn!("Token rejected: invalid signature"),
                _ => debug!("Token rejected: {e}"),
            }
            AppError::Unauthorized
        })
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    (scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty()).then(|| token.trim())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        let claims = verify_token(token, &state.config.jwt_secret)?;
        Ok(CurrentUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Recruiter {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        match user.role {
            Role::Recruiter => Ok(Recruiter(user)),
            Role::Handler => Err(AppError::Forbidden),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    pub(crate) const TEST_SECRET: &str = "test-secret";

    pub(crate) fn issue_token(role: Role, secret: &str, exp_offset_secs: i64) -> String {
        let claims = Claims {
            sub: Uuid::new_v4(),
            role,
            exp: chrono::Utc::now().timestamp() + exp_offset_secs,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let token = issue_token(Role::Handler, TEST_SECRET, 3600);
        let claims = verify_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.role, Role::Handler);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue_token(Role::Recruiter, "other-secret", 3600);
        assert!(matches!(verify_token(&token, TEST_SECRET), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_verify_rejects_expired() {
        let token = issue_token(Role::Recruiter, TEST_SECRET, -3600);
        assert!(matches!(verify_token(&token, TEST_SECRET), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
