/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * store selection, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations (or fall back to the
 *    in-memory store when no database is configured)
 * 2. Build the token service and avatar storage
 * 3. Create the router with all routes and middleware
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::sessions::TokenService;
use crate::routes::router::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;
use crate::store::{MemoryStore, PostgresStore, Store};
use crate::users::avatar::AvatarStore;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// The function is designed to be resilient: a missing or unreachable
/// database downgrades to the in-memory store with a warning rather than
/// aborting startup.
pub async fn create_app(config: ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing Inkpost backend server");

    let store: Arc<dyn Store> = match load_database(config.database_url.as_deref()).await {
        Some(pool) => Arc::new(PostgresStore::new(pool)),
        None => {
            tracing::warn!("Using the in-memory store; data will not survive restarts");
            Arc::new(MemoryStore::new())
        }
    };

    let tokens = TokenService::new(&config.jwt_secret);
    let avatars = AvatarStore::new(&config.upload_dir);

    let app_state = AppState::new(store, tokens, avatars);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
