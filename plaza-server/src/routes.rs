use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{api, state::AppState};

/// Build the application router with its permissive CORS layer
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/", get(home))
        // User routes
        .route("/users", get(api::users::get_users))
        .route("/users", post(api::users::create_user))
        // Post routes
        .route("/posts", get(api::posts::get_posts))
        .route("/posts", post(api::posts::create_post))
        .with_state(state)
        .layer(cors)
}

/// GET / - Simple health check
async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Plaza API is running!",
        "status": "ok"
    }))
}
