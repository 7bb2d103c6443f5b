use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod metrics;
mod models;
mod services;
mod store;
mod utils;

use crate::config::AppConfig;
use crate::store::{JsonFileStore, RecordStore};

pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    /// Present when the Prometheus exporter is installed
    pub prometheus: Option<PrometheusHandle>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "region_metrics=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    tracing::info!("Starting region-metrics v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.environment);

    let prometheus = if config.prometheus_enabled {
        let handle = crate::metrics::init_metrics()?;
        tracing::info!("Prometheus exporter installed at /prometheus");
        Some(handle)
    } else {
        tracing::info!("Prometheus exporter disabled");
        None
    };

    let store = JsonFileStore::new(&config.data_path);
    if !store.path().exists() {
        tracing::warn!(
            "Record file {} does not exist yet; /metrics will answer 500 until it does",
            store.path().display()
        );
    }
    tracing::info!("Serving records from {}", store.path().display());

    let state = Arc::new(AppState {
        store: Arc::new(store),
        prometheus,
    });

    let app = api::routes::build_app(state);

    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
