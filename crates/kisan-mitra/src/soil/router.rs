use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::SoilSample;
use super::repository::{AssessmentId, AssessmentRepository, RepositoryError};
use super::service::{SoilAssessmentService, SoilServiceError};

/// Router builder exposing soil assessment endpoints.
pub fn soil_router<R>(service: Arc<SoilAssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/soil/assessments", post(submit_handler::<R>))
        .route(
            "/api/v1/soil/assessments/:assessment_id",
            get(status_handler::<R>),
        )
        .route("/api/v1/soil/preview", post(preview_handler::<R>))
        .route("/api/v1/soil/mock-sample", get(mock_sample_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<SoilAssessmentService<R>>>,
    Json(sample): Json<SoilSample>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.submit(sample) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<SoilAssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(SoilServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "assessment_id": id.0,
                "error": "assessment not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<SoilAssessmentService<R>>>,
    Json(sample): Json<SoilSample>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.preview(&sample) {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn mock_sample_handler() -> Json<SoilSample> {
    Json(SoilSample::mock_upload())
}

fn error_response(err: SoilServiceError) -> Response {
    let status = match &err {
        SoilServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SoilServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SoilServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
