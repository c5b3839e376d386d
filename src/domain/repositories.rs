//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, Student, Test, TestResult};

/// Store for students, tests and their results
///
/// Every method is a single atomic read or write. Aggregates are computed
/// over the results recorded at call time.
#[async_trait]
pub trait GradebookRepository: Send + Sync {
    /// Register a student; fails with `DuplicateKey` if the id is taken
    async fn add_student(&self, student: Student) -> Result<(), DomainError>;

    /// Find a student by ID
    async fn get_student(&self, id: i64) -> Result<Student, DomainError>;

    /// All students, in insertion order
    async fn list_students(&self) -> Result<Vec<Student>, DomainError>;

    /// Remove a student. Results already recorded for them are kept.
    async fn delete_student(&self, id: i64) -> Result<(), DomainError>;

    /// Define a test; fails with `DuplicateKey` if the id is taken
    async fn add_test(&self, test: Test) -> Result<(), DomainError>;

    /// Find a test by ID
    async fn get_test(&self, id: i64) -> Result<Test, DomainError>;

    /// All tests, in insertion order
    async fn list_tests(&self) -> Result<Vec<Test>, DomainError>;

    /// Record a result. Both the student and the test must exist right now;
    /// the score is not checked against the test's maximum.
    async fn submit_result(&self, result: TestResult) -> Result<(), DomainError>;

    /// Results for one student, in submission order
    async fn results_by_student(&self, student_id: i64) -> Result<Vec<TestResult>, DomainError>;

    /// Results for one test, in submission order
    async fn results_by_test(&self, test_id: i64) -> Result<Vec<TestResult>, DomainError>;

    /// Arithmetic mean of the scores recorded for a test
    async fn average_score(&self, test_id: i64) -> Result<f64, DomainError>;

    /// Highest score recorded for a test
    async fn highest_score(&self, test_id: i64) -> Result<i64, DomainError>;
}
