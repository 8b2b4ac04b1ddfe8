use jsonwebtoken::{DecodingKey, Validation};
use sqlx::SqlitePool;

use crate::config::AuthConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_decoding_key: DecodingKey,
    pub jwt_validation: Validation,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth: &AuthConfig) -> Self {
        Self {
            pool,
            jwt_decoding_key: DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
            jwt_validation: Validation::new(auth.jwt_algorithm),
        }
    }
}
