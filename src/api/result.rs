//! Test result handlers and score aggregates

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{ErrorResponse, MessageResponse};
use crate::domain::{DomainError, TestResult};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitResultRequest {
    pub student_id: i64,
    pub test_id: i64,
    /// Not checked against the test's max_score
    pub score: i64,
}

impl From<SubmitResultRequest> for TestResult {
    fn from(req: SubmitResultRequest) -> Self {
        Self {
            student_id: req.student_id,
            test_id: req.test_id,
            score: req.score,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AverageScoreResponse {
    pub average_score: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HighestScoreResponse {
    pub highest_score: i64,
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = SubmitResultRequest,
    responses(
        (status = 200, description = "Result recorded", body = MessageResponse),
        (status = 404, description = "Student or test not found", body = ErrorResponse)
    )
)]
pub async fn submit_result(
    State(state): State<AppState>,
    Json(payload): Json<SubmitResultRequest>,
) -> Result<Json<MessageResponse>, DomainError> {
    state.gradebook.submit_result(payload.into()).await?;
    Ok(MessageResponse::new("Test result submitted successfully"))
}

#[utoipa::path(
    get,
    path = "/api/results/student/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Results for the student, possibly empty", body = [TestResult])
    )
)]
pub async fn get_student_results(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<TestResult>>, DomainError> {
    state.gradebook.results_by_student(student_id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/results/test/{id}",
    params(("id" = i64, Path, description = "Test identifier")),
    responses(
        (status = 200, description = "Results for the test, possibly empty", body = [TestResult])
    )
)]
pub async fn get_test_results(
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Result<Json<Vec<TestResult>>, DomainError> {
    state.gradebook.results_by_test(test_id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/results/test/{id}/average",
    params(("id" = i64, Path, description = "Test identifier")),
    responses(
        (status = 200, description = "Mean score", body = AverageScoreResponse),
        (status = 404, description = "No results found for this test", body = ErrorResponse)
    )
)]
pub async fn get_average_score(
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Result<Json<AverageScoreResponse>, DomainError> {
    let average_score = state.gradebook.average_score(test_id).await?;
    Ok(Json(AverageScoreResponse { average_score }))
}

#[utoipa::path(
    get,
    path = "/api/results/test/{id}/highest",
    params(("id" = i64, Path, description = "Test identifier")),
    responses(
        (status = 200, description = "Highest score", body = HighestScoreResponse),
        (status = 404, description = "No results found for this test", body = ErrorResponse)
    )
)]
pub async fn get_highest_score(
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Result<Json<HighestScoreResponse>, DomainError> {
    let highest_score = state.gradebook.highest_score(test_id).await?;
    Ok(Json(HighestScoreResponse { highest_score }))
}
