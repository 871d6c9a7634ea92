//! HTTP routing.
//!
//! Every route shares one `AppState`. Requests are traced by
//! `tower_http::trace::TraceLayer` (method, path, status, latency).

pub mod items;
pub mod meta;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the full application router.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(meta::router())
        .merge(items::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
