use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::models::{MetricsReport, MetricsRequest, INVALID_REQUEST_BODY};
use crate::services::region_metrics;
use crate::store::RecordStore;
use crate::utils::response::AppError;
use crate::AppState;

/// Validate the body, read the store and aggregate.
///
/// Independent of the HTTP framework: any front end that can hand over the
/// raw body and map an [`AppError`] to a status code can serve this.
pub fn evaluate(store: &dyn RecordStore, body: &[u8]) -> Result<MetricsReport, AppError> {
    let request = MetricsRequest::parse(body).map_err(|e| {
        tracing::warn!("Rejected metrics request: {}", e);
        AppError::bad_request(INVALID_REQUEST_BODY)
    })?;

    let records = store.load()?;
    let report = region_metrics::compute_report(&records, &request).map_err(|e| {
        tracing::error!("Metrics computation failed: {}", e);
        AppError::from(e)
    })?;

    crate::metrics::record_region_lookup(request.regions.len(), report.len());
    tracing::debug!(
        "Metrics computed for {:?}: {} of {} requested regions resolved, {} records scanned",
        report.regions().collect::<Vec<_>>(),
        report.len(),
        request.regions.len(),
        records.len()
    );

    Ok(report)
}

/// POST /metrics
///
/// The store read is blocking file I/O, so the whole evaluation runs on the
/// blocking pool.
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MetricsReport>, AppError> {
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || evaluate(store.as_ref(), &body))
        .await
        .map_err(|e| {
            tracing::error!("Metrics task failed: {}", e);
            AppError::internal(&e.to_string())
        })?
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, StoredRecord};
    use crate::store::{StaticStore, StoreError};
    use axum::http::StatusCode;

    struct MissingStore;

    impl RecordStore for MissingStore {
        fn load(&self) -> Result<Vec<StoredRecord>, StoreError> {
            Err(StoreError::NotFound)
        }
    }

    struct PanickingStore;

    impl RecordStore for PanickingStore {
        fn load(&self) -> Result<Vec<StoredRecord>, StoreError> {
            panic!("store must not be read for an invalid request");
        }
    }

    fn store() -> StaticStore {
        StaticStore::new(vec![
            Record::new("apac", 100.0, 99.9),
            Record::new("apac", 200.0, 99.5),
            Record::new("emea", 150.0, 99.0),
        ])
    }

    #[test]
    fn test_evaluate_success() {
        let report = evaluate(&store(), br#"{"regions": ["emea", "na"], "threshold_ms": 100}"#)
            .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("emea").unwrap().breaches, 1);
    }

    #[test]
    fn test_invalid_body_never_reads_store() {
        let err = evaluate(&PanickingStore, br#"{"regions": ["apac"]}"#).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, INVALID_REQUEST_BODY);
    }

    #[test]
    fn test_missing_store_is_server_error() {
        let err = evaluate(&MissingStore, br#"{"regions": ["apac"], "threshold_ms": 1}"#)
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "data.json not found on the server");
    }

    #[test]
    fn test_broken_record_only_fails_its_region() {
        let mut records: Vec<StoredRecord> = vec![
            Record::new("apac", 100.0, 99.9).into(),
            Record::new("apac", 200.0, 99.5).into(),
        ];
        records.push(
            serde_json::json!({"region": "emea", "latency_ms": null, "uptime_percent": 99.0})
                .into(),
        );
        let store = StaticStore::from_stored(records);

        let report = evaluate(&store, br#"{"regions": ["apac"], "threshold_ms": 50}"#).unwrap();
        assert_eq!(report.get("apac").unwrap().breaches, 2);

        let err = evaluate(&store, br#"{"regions": ["emea"], "threshold_ms": 50}"#).unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("emea"));
    }

    #[tokio::test]
    async fn test_handler_runs_on_blocking_pool() {
        let state = Arc::new(AppState {
            store: Arc::new(store()),
            prometheus: None,
        });
        let body = Bytes::from_static(br#"{"regions": ["apac"], "threshold_ms": 150}"#);

        let Json(report) = get_metrics(State(state), body).await.unwrap();
        assert_eq!(report.get("apac").unwrap().breaches, 1);
    }

    #[tokio::test]
    async fn test_handler_task_failure_is_server_error() {
        let state = Arc::new(AppState {
            store: Arc::new(PanickingStore),
            prometheus: None,
        });
        let body = Bytes::from_static(br#"{"regions": ["apac"], "threshold_ms": 1}"#);

        let err = get_metrics(State(state), body).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
