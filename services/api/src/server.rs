use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository};
use crate::routes::with_soil_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use kisan_mitra::config::AppConfig;
use kisan_mitra::error::AppError;
use kisan_mitra::soil::SoilAssessmentService;
use kisan_mitra::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let soil_service = Arc::new(SoilAssessmentService::new(repository, config.engine));
    let engine = soil_service.config();

    let app = with_soil_routes(soil_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        strict_validation = engine.strict_validation,
        "soil advisory service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
