use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use kisan_mitra::error::AppError;
use kisan_mitra::soil::{
    soil_router, Assessment, AssessmentRepository, SoilAssessmentService, SoilReportImporter,
    SoilSample,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct SoilReportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SoilReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) samples: Vec<SoilReportEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SoilReportEntry {
    pub(crate) label: String,
    pub(crate) sample: SoilSample,
    pub(crate) assessment: Assessment,
}

pub(crate) fn with_soil_routes<R>(service: Arc<SoilAssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    let report = Router::new()
        .route("/api/v1/soil/report", post(soil_report_endpoint::<R>))
        .with_state(service.clone());

    soil_router(service)
        .merge(report)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Assess every row of a pasted soil-lab export without storing anything.
pub(crate) async fn soil_report_endpoint<R>(
    State(service): State<Arc<SoilAssessmentService<R>>>,
    Json(payload): Json<SoilReportRequest>,
) -> Result<Json<SoilReportResponse>, AppError>
where
    R: AssessmentRepository + 'static,
{
    let imported = SoilReportImporter::from_reader(Cursor::new(payload.csv.into_bytes()))?;

    let mut samples = Vec::with_capacity(imported.len());
    for row in imported {
        let assessment = service.preview(&row.sample)?;
        samples.push(SoilReportEntry {
            label: row.label,
            sample: row.sample,
            assessment,
        });
    }

    info!(rows = samples.len(), "soil report assessed");
    Ok(Json(SoilReportResponse {
        generated_at: Utc::now(),
        samples,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryAssessmentRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use kisan_mitra::config::EngineConfig;
    use kisan_mitra::soil::HealthBand;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    const REPORT_CSV: &str = "Sample ID,pH,Nitrogen,Phosphorus,Potassium,Organic Matter,Moisture,Temperature\n\
                              north-field,6.5,45,25,180,3.2,22,18\n\
                              ,6.8,120,30,200,3.0,25,24\n";

    fn service(strict_validation: bool) -> Arc<SoilAssessmentService<InMemoryAssessmentRepository>> {
        Arc::new(SoilAssessmentService::new(
            Arc::new(InMemoryAssessmentRepository::default()),
            EngineConfig { strict_validation },
        ))
    }

    fn app_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn report_request(csv: &str) -> Json<SoilReportRequest> {
        Json(SoilReportRequest {
            csv: csv.to_string(),
        })
    }

    #[tokio::test]
    async fn soil_report_endpoint_assesses_each_row() {
        let Json(body) = soil_report_endpoint(State(service(false)), report_request(REPORT_CSV))
            .await
            .expect("report builds");

        assert_eq!(body.samples.len(), 2);
        assert_eq!(body.samples[0].label, "north-field");
        assert_eq!(body.samples[0].assessment.health_score, 85);
        assert_eq!(body.samples[1].label, "row-2");
        assert_eq!(body.samples[1].assessment.health_score, 100);
        assert_eq!(body.samples[1].assessment.health_band, HealthBand::Excellent);
    }

    #[tokio::test]
    async fn soil_report_endpoint_rejects_empty_reports() {
        let err = soil_report_endpoint(
            State(service(false)),
            report_request("Sample ID,pH,Nitrogen\n"),
        )
        .await
        .expect_err("no rows");

        assert!(matches!(err, AppError::Import(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn soil_report_endpoint_honours_strict_validation() {
        let csv = "Sample ID,pH,Nitrogen,Phosphorus,Potassium,Organic Matter,Moisture,Temperature\n\
                   plot-a,15.2,40,25,180,3.2,22,18\n";
        let err = soil_report_endpoint(State(service(true)), report_request(csv))
            .await
            .expect_err("pH above 14 rejected");

        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn health_and_readiness_routes_respond() {
        let app = with_soil_routes(service(false)).layer(Extension(app_state(false)));

        let health = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("health responds");
        assert_eq!(health.status(), StatusCode::OK);

        let ready = app
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("ready responds");
        assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = to_bytes(ready.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(payload["status"], "initializing");
    }

    #[tokio::test]
    async fn report_route_is_mounted_alongside_soil_routes() {
        let app = with_soil_routes(service(false)).layer(Extension(app_state(true)));
        let body = serde_json::to_vec(&json!({ "csv": REPORT_CSV })).expect("json encodes");

        let response = app
            .oneshot(
                Request::post("/api/v1/soil/report")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("report responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(payload["samples"][0]["assessment"]["health_band"], "excellent");
        assert_eq!(payload["samples"][1]["sample"]["nitrogen"], 120.0);
    }
}
