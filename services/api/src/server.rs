use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryWeightStore};
use crate::routes::with_wellbeing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use wellbeing::config::AppConfig;
use wellbeing::error::AppError;
use wellbeing::scoring::{ScoreEngine, WellbeingService};
use wellbeing::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryWeightStore::default());
    let engine = ScoreEngine::new(config.scoring);
    let service = Arc::new(WellbeingService::new(store, engine));

    let app = with_wellbeing_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        meditation_window = ?config.scoring.meditation_window,
        "wellbeing score service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
