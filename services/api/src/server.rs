use crate::cli::ServeArgs;
use crate::infra::{build_analyzer, AppState};
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use purchase_advisor::analysis::AnalysisService;
use purchase_advisor::config::AppConfig;
use purchase_advisor::error::AppError;
use purchase_advisor::scoring::DecisionEngine;
use purchase_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let analyzer = build_analyzer(&config.analysis);
    let analysis_service = Arc::new(AnalysisService::new(
        analyzer,
        DecisionEngine::new(config.scoring.clone()),
        config.analysis.timeout,
    ));

    let app = with_analysis_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        remote_analysis = config.analysis.endpoint.is_some(),
        buy_threshold = config.scoring.thresholds.buy,
        consider_threshold = config.scoring.thresholds.consider,
        "purchase advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
