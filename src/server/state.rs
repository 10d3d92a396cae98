/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The store (PostgreSQL in production, in-memory in tests)
 * - The session token service
 * - Avatar file storage
 *
 * # Thread Safety
 *
 * All fields are cheaply cloneable handles; the store and token service
 * sit behind `Arc` and are shared across all request handlers.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::sessions::TokenService;
use crate::store::Store;
use crate::users::avatar::AvatarStore;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend
    pub store: Arc<dyn Store>,

    /// Session token issuing and verification
    pub tokens: Arc<TokenService>,

    /// Avatar file storage
    pub avatars: AvatarStore,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService, avatars: AvatarStore) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            avatars,
        }
    }
}

/// Allows handlers to extract the store directly from `AppState`.
impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allows handlers to extract the token service directly from `AppState`.
impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Allows handlers to extract avatar storage directly from `AppState`.
impl FromRef<AppState> for AvatarStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.avatars.clone()
    }
}
