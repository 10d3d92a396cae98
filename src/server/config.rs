/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables, with sensible defaults for local development.
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent server startup.
 * A missing `DATABASE_URL` switches the server to the in-memory store;
 * a missing `JWT_SECRET` falls back to a development-only secret.
 */

use sqlx::PgPool;

/// Default HTTP port when `SERVER_PORT` is not set
const DEFAULT_PORT: u16 = 3000;

/// Default avatar upload directory when `UPLOAD_DIR` is not set
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Server configuration loaded from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// HTTP listen port (`SERVER_PORT`)
    pub port: u16,
    /// PostgreSQL connection string (`DATABASE_URL`), if set
    pub database_url: Option<String>,
    /// Session token signing secret (`JWT_SECRET`)
    pub jwt_secret: String,
    /// Avatar upload directory (`UPLOAD_DIR`)
    pub upload_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Never fails; every value has a fallback suitable for local
    /// development. Fallbacks that matter in production (the signing
    /// secret) are logged loudly.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Falling back to the in-memory store.");
        }

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "JWT_SECRET not set. Using an insecure development secret; \
                     sessions will not survive restarts in production."
                );
                "inkpost-dev-secret".to_string()
            }
        };

        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());

        Self {
            port,
            database_url,
            jwt_secret,
            upload_dir,
        }
    }
}

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The caller falls
/// back to the in-memory store on `None`.
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let database_url = database_url?;

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory store.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
