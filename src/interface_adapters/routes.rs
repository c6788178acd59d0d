use crate::interface_adapters::handlers::page::{landing_page, page_content};
use crate::interface_adapters::handlers::registration::{method_not_allowed, submit_registration};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/", get(landing_page))
        .route("/content", get(page_content))
        .route(
            "/registration/submit",
            post(submit_registration).fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
