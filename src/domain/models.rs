//! Gradebook records
//!
//! Fixed-shape records held by the store. Identifiers are assigned by the
//! caller, never generated here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A test definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Test {
    pub id: i64,
    pub name: String,
    pub max_score: i64,
}

/// A score one student obtained on one test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TestResult {
    pub student_id: i64,
    pub test_id: i64,
    pub score: i64,
}
