//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Insert with an identifier that is already taken
    DuplicateKey(String),
    /// Lookup, delete or aggregate that matched nothing
    NotFound(String),
    /// Request rejected before reaching the store
    Validation(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::DuplicateKey(msg) => write!(f, "{}", msg),
            DomainError::NotFound(msg) => write!(f, "{}", msg),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    pub fn student_exists() -> Self {
        DomainError::DuplicateKey("Student ID already exists".to_string())
    }

    pub fn test_exists() -> Self {
        DomainError::DuplicateKey("Test ID already exists".to_string())
    }

    pub fn student_not_found() -> Self {
        DomainError::NotFound("Student not found".to_string())
    }

    pub fn test_not_found() -> Self {
        DomainError::NotFound("Test not found".to_string())
    }

    pub fn no_results() -> Self {
        DomainError::NotFound("No results found for this test".to_string())
    }
}
