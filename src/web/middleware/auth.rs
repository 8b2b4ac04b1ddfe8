use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Principal extracted from a verified bearer token; injected into request
/// extensions for downstream handlers.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return AppError::InvalidToken.into_response();
    };

    match authenticate(token, &state.jwt_decoding_key, &state.jwt_validation) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

/// Signature mismatch, malformed token, expiry and a missing subject claim
/// all collapse into the same 401.
pub fn authenticate(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<AuthenticatedUser, AppError> {
    let data = decode::<Claims>(token, key, validation).map_err(|_| AppError::InvalidToken)?;
    let username = data.claims.sub.ok_or(AppError::InvalidToken)?;
    Ok(AuthenticatedUser { username })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Serialize)]
    struct TestClaims {
        sub: Option<String>,
        exp: u64,
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn token(secret: &str, sub: Option<&str>, exp: u64) -> String {
        let claims = TestClaims {
            sub: sub.map(|s| s.to_string()),
            exp,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn verifier(secret: &str) -> (DecodingKey, Validation) {
        (
            DecodingKey::from_secret(secret.as_bytes()),
            Validation::new(Algorithm::HS256),
        )
    }

    #[test]
    fn valid_token_yields_subject() {
        let (key, validation) = verifier("s3cret");
        let token = token("s3cret", Some("principal"), now() + 600);
        let user = authenticate(&token, &key, &validation).unwrap();
        assert_eq!(user.username, "principal");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let (key, validation) = verifier("s3cret");
        let token = token("other-secret", Some("principal"), now() + 600);
        let err = authenticate(&token, &key, &validation).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn missing_subject_is_rejected() {
        let (key, validation) = verifier("s3cret");
        let token = token("s3cret", None, now() + 600);
        let err = authenticate(&token, &key, &validation).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn expired_token_is_rejected() {
        let (key, validation) = verifier("s3cret");
        // Past the default 60s leeway.
        let token = token("s3cret", Some("principal"), now() - 600);
        let err = authenticate(&token, &key, &validation).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let (key, validation) = verifier("s3cret");
        let err = authenticate("not.a.jwt", &key, &validation).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
