//! Student handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::{ErrorResponse, MessageResponse};
use crate::domain::{DomainError, Student};
use crate::infrastructure::AppState;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub id: i64,
    /// Full name, 2 to 50 characters
    pub name: String,
    pub email: String,
}

impl CreateStudentRequest {
    fn validate(self) -> Result<Student, DomainError> {
        let len = self.name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
            return Err(DomainError::Validation(format!(
                "name must be between {} and {} characters, got {}",
                NAME_MIN_CHARS, NAME_MAX_CHARS, len
            )));
        }

        Ok(Student {
            id: self.id,
            name: self.name,
            email: self.email,
        })
    }
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Student added", body = MessageResponse),
        (status = 400, description = "Student ID already exists", body = ErrorResponse),
        (status = 422, description = "Name outside the allowed length", body = ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<Json<MessageResponse>, DomainError> {
    let student = payload.validate()?;
    state.gradebook.add_student(student).await?;
    Ok(MessageResponse::new("Student added successfully"))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student record", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, DomainError> {
    state.gradebook.get_student(id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students in insertion order", body = [Student])
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, DomainError> {
    state.gradebook.list_students().await.map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student deleted, results kept", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, DomainError> {
    state.gradebook.delete_student(id).await?;
    Ok(MessageResponse::new("Student deleted successfully"))
}
