use flames::config::FormConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) form: Arc<FormConfig>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle, form: FormConfig) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            form: Arc::new(form),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    // A detached recorder: rendering works without installing a global one.
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();
    AppState::new(handle, FormConfig::default())
}
