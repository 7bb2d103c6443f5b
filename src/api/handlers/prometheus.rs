use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::utils::response::AppError;
use crate::AppState;

/// Render the Prometheus text exposition for this process
pub async fn render_metrics(State(state): State<Arc<AppState>>) -> Result<String, AppError> {
    state
        .prometheus
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "Prometheus exporter is disabled"))
}
