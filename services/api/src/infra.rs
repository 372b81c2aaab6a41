use metrics_exporter_prometheus::PrometheusHandle;
use purchase_advisor::analysis::{HttpAnalyzer, RemoteAnalyzer, UnavailableAnalyzer};
use purchase_advisor::config::AnalysisConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Remote analyzer for the configured endpoint, or the always-unavailable
/// stand-in when none is set.
pub(crate) fn build_analyzer(config: &AnalysisConfig) -> Arc<dyn RemoteAnalyzer> {
    match config.endpoint.as_deref() {
        Some(endpoint) => Arc::new(HttpAnalyzer::new(endpoint)),
        None => Arc::new(UnavailableAnalyzer),
    }
}
