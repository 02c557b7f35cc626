use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::flames_router;
use axum_prometheus::PrometheusMetricLayer;
use flames::config::AppConfig;
use flames::error::AppError;
use flames::telemetry;
use std::sync::atomic::Ordering;
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
    let app_state = AppState::new(prometheus_handle, config.form.clone());
    let readiness_flag = app_state.readiness.clone();

    let app = flames_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "flames form service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
