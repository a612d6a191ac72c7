mod health;
mod items;
mod root;

use axum::{
    routing::{get, post},
    Router,
};

/// Creates the router with all handler routes
pub fn handler() -> Router {
    Router::new()
        .route("/", get(root::handler))
        .route("/health", get(health::handler))
        .route("/items/{item_id}", post(items::create_item))
}
