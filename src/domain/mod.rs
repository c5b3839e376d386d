//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no storage).
//! Only record types, trait definitions and domain error types.

pub mod errors;
pub mod models;
pub mod repositories;

pub use errors::DomainError;
pub use models::{Student, Test, TestResult};
pub use repositories::*;
