use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::middleware::metrics_middleware;
use crate::AppState;

/// CORS policy for `/metrics`: any origin, POST only
fn metrics_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers(Any)
}

pub fn create_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/metrics",
            post(handlers::metrics::get_metrics).layer(metrics_cors()),
        );

    if state.prometheus.is_some() {
        router = router.route("/prometheus", get(handlers::prometheus::render_metrics));
    }

    router
}

/// Full application: routes, request tracing and HTTP metrics, bound to `state`
pub fn build_app(state: Arc<AppState>) -> Router {
    create_router(state.clone())
        .layer(axum_middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
