pub mod health;
pub mod result;
pub mod student;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

/// Confirmation payload returned by successful mutations
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Error payload
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Students
        .route(
            "/students",
            get(student::list_students).post(student::create_student),
        )
        .route(
            "/students/:id",
            get(student::get_student).delete(student::delete_student),
        )
        // Tests
        .route("/tests", get(test::list_tests).post(test::create_test))
        .route("/tests/:id", get(test::get_test))
        // Results
        .route("/results", post(result::submit_result))
        .route("/results/student/:id", get(result::get_student_results))
        .route("/results/test/:id", get(result::get_test_results))
        .route("/results/test/:id/average", get(result::get_average_score))
        .route("/results/test/:id/highest", get(result::get_highest_score))
        .with_state(state)
}
