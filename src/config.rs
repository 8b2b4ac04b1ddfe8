use std::{env, fmt::Display, str::FromStr};

use jsonwebtoken::Algorithm;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
}

/// Token verification settings. Loaded once at startup; the secret is never
/// read again after the decoding key is built.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            database_url: try_load("DATABASE_URL", "sqlite://activities.db?mode=rwc"),
            port: try_load("PORT", "8000"),
            auth: AuthConfig {
                jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
                jwt_algorithm: try_load("JWT_ALGORITHM", "HS256"),
            },
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
