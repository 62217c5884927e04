use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::comments;
use super::commodities;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::users;

fn commodity_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(commodities::list_commodities))
        .route("/search", post(commodities::search_commodities))
        .route("/{id}", get(commodities::get_commodity))
        .route("/{id}/rate", post(commodities::rate_commodity))
        .route(
            "/{id}/comment",
            get(commodities::list_comments).post(commodities::add_comment),
        )
        .route("/{id}/suggested", get(commodities::suggested_commodities))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(users::get_user))
        .route("/{id}/credit", post(users::add_credit))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/like", post(comments::like_comment))
        .route("/{id}/dislike", post(comments::dislike_comment))
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/commodities", commodity_routes())
        .nest("/users", user_routes())
        .nest("/comments", comment_routes())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
