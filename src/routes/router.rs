/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Public routes (register, login) are assembled first, then the protected
 * routes with the auth gate layered on, then static file serving and the
 * JSON 404 fallback.
 *
 * # Route Priority
 *
 * `/article/fetch-all` and `/article/id/{id}` are registered alongside
 * `/article/{slug}`; axum matches static segments before parameters, so
 * "fetch-all" is never treated as a slug.
 */

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::articles::handlers::{
    create_article, delete_article, fetch_all_articles, get_article_by_id, get_article_by_slug,
    update_article,
};
use crate::auth::handlers::{login, logout, register};
use crate::comments::handlers::{create_comment, delete_comment};
use crate::middleware::auth::auth_gate;
use crate::server::state::AppState;
use crate::users::handlers::{delete_user, get_profile, get_user_articles, update_user};

/// Upload size cap for the multipart profile update (5 MiB)
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (store, token service, avatar storage)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    // Routes reachable without a session
    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    // Everything else requires a valid session cookie
    let protected = Router::new()
        .route("/auth/logout", get(logout))
        .route("/article/create", post(create_article))
        .route("/article/fetch-all", get(fetch_all_articles))
        .route("/article/id/{id}", get(get_article_by_id))
        .route("/article/{slug}", get(get_article_by_slug))
        .route("/article/update/{id}", put(update_article))
        .route("/article/delete/{id}", delete(delete_article))
        .route("/comment/create", post(create_comment))
        .route("/comment/delete/{id}", delete(delete_comment))
        .route("/user/profile/{id}", get(get_profile))
        .route("/user/articles/{id}", get(get_user_articles))
        .route(
            "/user/update",
            put(update_user).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/user/delete", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_gate,
        ));

    // Serve uploaded avatars
    let uploads = ServeDir::new(app_state.avatars.dir());

    public
        .merge(protected)
        .nest_service("/uploads", uploads)
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Resource not found" })),
            )
        })
        .with_state(app_state)
}
