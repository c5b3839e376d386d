//! In-memory implementation of GradebookRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, GradebookRepository, Student, Test, TestResult};

#[derive(Debug, Default)]
struct Collections {
    students: Vec<Student>,
    tests: Vec<Test>,
    results: Vec<TestResult>,
}

impl Collections {
    fn student(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    fn test(&self, id: i64) -> Option<&Test> {
        self.tests.iter().find(|t| t.id == id)
    }

    fn scores_for_test(&self, test_id: i64) -> impl Iterator<Item = i64> + '_ {
        self.results
            .iter()
            .filter(move |r| r.test_id == test_id)
            .map(|r| r.score)
    }
}

/// Process-lifetime store holding students, tests and results
///
/// A single lock guards all three collections so that `submit_result`
/// checks both references and appends without a delete slipping in between.
#[derive(Debug, Default)]
pub struct InMemoryGradebookStore {
    inner: RwLock<Collections>,
}

impl InMemoryGradebookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GradebookRepository for InMemoryGradebookStore {
    async fn add_student(&self, student: Student) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        if inner.student(student.id).is_some() {
            tracing::debug!(student_id = student.id, "Rejected duplicate student");
            return Err(DomainError::student_exists());
        }

        tracing::debug!(student_id = student.id, "Student added");
        inner.students.push(student);
        Ok(())
    }

    async fn get_student(&self, id: i64) -> Result<Student, DomainError> {
        let inner = self.inner.read().await;
        inner
            .student(id)
            .cloned()
            .ok_or_else(DomainError::student_not_found)
    }

    async fn list_students(&self) -> Result<Vec<Student>, DomainError> {
        Ok(self.inner.read().await.students.clone())
    }

    async fn delete_student(&self, id: i64) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        let pos = inner
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| {
                tracing::debug!(student_id = id, "Delete of unknown student");
                DomainError::student_not_found()
            })?;

        // Keeps the remaining students in insertion order
        inner.students.remove(pos);
        tracing::debug!(student_id = id, "Student deleted");
        Ok(())
    }

    async fn add_test(&self, test: Test) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        if inner.test(test.id).is_some() {
            tracing::debug!(test_id = test.id, "Rejected duplicate test");
            return Err(DomainError::test_exists());
        }

        tracing::debug!(test_id = test.id, max_score = test.max_score, "Test added");
        inner.tests.push(test);
        Ok(())
    }

    async fn get_test(&self, id: i64) -> Result<Test, DomainError> {
        let inner = self.inner.read().await;
        inner
            .test(id)
            .cloned()
            .ok_or_else(DomainError::test_not_found)
    }

    async fn list_tests(&self) -> Result<Vec<Test>, DomainError> {
        Ok(self.inner.read().await.tests.clone())
    }

    async fn submit_result(&self, result: TestResult) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        if inner.student(result.student_id).is_none() {
            tracing::debug!(student_id = result.student_id, "Result for unknown student");
            return Err(DomainError::student_not_found());
        }
        if inner.test(result.test_id).is_none() {
            tracing::debug!(test_id = result.test_id, "Result for unknown test");
            return Err(DomainError::test_not_found());
        }

        tracing::debug!(
            student_id = result.student_id,
            test_id = result.test_id,
            score = result.score,
            "Result submitted"
        );
        inner.results.push(result);
        Ok(())
    }

    async fn results_by_student(&self, student_id: i64) -> Result<Vec<TestResult>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .results
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn results_by_test(&self, test_id: i64) -> Result<Vec<TestResult>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .results
            .iter()
            .filter(|r| r.test_id == test_id)
            .cloned()
            .collect())
    }

    async fn average_score(&self, test_id: i64) -> Result<f64, DomainError> {
        let inner = self.inner.read().await;

        let (sum, count) = inner
            .scores_for_test(test_id)
            .fold((0i128, 0u64), |(sum, count), score| {
                (sum + i128::from(score), count + 1)
            });

        if count == 0 {
            return Err(DomainError::no_results());
        }

        Ok(sum as f64 / count as f64)
    }

    async fn highest_score(&self, test_id: i64) -> Result<i64, DomainError> {
        let inner = self.inner.read().await;
        inner
            .scores_for_test(test_id)
            .max()
            .ok_or_else(DomainError::no_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i64, name: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            email: format!("{}@school.test", name.to_lowercase()),
        }
    }

    fn test_def(id: i64, max_score: i64) -> Test {
        Test {
            id,
            name: format!("Test {}", id),
            max_score,
        }
    }

    fn result(student_id: i64, test_id: i64, score: i64) -> TestResult {
        TestResult {
            student_id,
            test_id,
            score,
        }
    }

    #[tokio::test]
    async fn test_add_then_get_returns_equal_record() {
        let store = InMemoryGradebookStore::new();
        let alice = student(1, "Alice");

        store.add_student(alice.clone()).await.unwrap();
        assert_eq!(store.get_student(1).await.unwrap(), alice);

        let exam = test_def(5, 100);
        store.add_test(exam.clone()).await.unwrap();
        assert_eq!(store.get_test(5).await.unwrap(), exam);
    }

    #[tokio::test]
    async fn test_duplicate_student_keeps_original() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();

        let err = store.add_student(student(1, "Mallory")).await.unwrap_err();
        assert_eq!(err, DomainError::student_exists());
        assert_eq!(store.get_student(1).await.unwrap().name, "Alice");
        assert_eq!(store.list_students().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_test_keeps_original() {
        let store = InMemoryGradebookStore::new();
        store.add_test(test_def(5, 100)).await.unwrap();

        let err = store.add_test(test_def(5, 20)).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
        assert_eq!(store.get_test(5).await.unwrap().max_score, 100);
    }

    #[tokio::test]
    async fn test_get_missing_records() {
        let store = InMemoryGradebookStore::new();
        assert_eq!(
            store.get_student(42).await.unwrap_err(),
            DomainError::student_not_found()
        );
        assert_eq!(
            store.get_test(42).await.unwrap_err(),
            DomainError::test_not_found()
        );
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryGradebookStore::new();
        for (id, name) in [(3, "Carol"), (1, "Alice"), (2, "Bob")] {
            store.add_student(student(id, name)).await.unwrap();
        }

        let ids: Vec<i64> = store
            .list_students()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);

        // Re-adding after delete appends at the end
        store.delete_student(3).await.unwrap();
        store.add_student(student(3, "Carol")).await.unwrap();
        let ids: Vec<i64> = store
            .list_students()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_student_does_not_cascade() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();
        store.add_test(test_def(5, 100)).await.unwrap();
        store.submit_result(result(1, 5, 80)).await.unwrap();

        store.delete_student(1).await.unwrap();

        assert!(store.list_students().await.unwrap().is_empty());
        assert_eq!(
            store.results_by_student(1).await.unwrap(),
            vec![result(1, 5, 80)]
        );
        assert_eq!(store.average_score(5).await.unwrap(), 80.0);
    }

    #[tokio::test]
    async fn test_delete_missing_student() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();

        assert!(matches!(
            store.delete_student(2).await,
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(store.list_students().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_result_requires_both_references() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();
        store.add_test(test_def(5, 100)).await.unwrap();

        assert_eq!(
            store.submit_result(result(2, 5, 70)).await.unwrap_err(),
            DomainError::student_not_found()
        );
        assert_eq!(
            store.submit_result(result(1, 6, 70)).await.unwrap_err(),
            DomainError::test_not_found()
        );
        // Student is checked before test
        assert_eq!(
            store.submit_result(result(2, 6, 70)).await.unwrap_err(),
            DomainError::student_not_found()
        );

        assert!(store.results_by_student(1).await.unwrap().is_empty());
        assert!(store.results_by_test(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_result_after_student_deleted() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();
        store.add_test(test_def(5, 100)).await.unwrap();
        store.delete_student(1).await.unwrap();

        assert!(matches!(
            store.submit_result(result(1, 5, 50)).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_score_is_not_capped_and_duplicates_allowed() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();
        store.add_test(test_def(5, 10)).await.unwrap();

        store.submit_result(result(1, 5, 150)).await.unwrap();
        store.submit_result(result(1, 5, -3)).await.unwrap();

        assert_eq!(
            store.results_by_test(5).await.unwrap(),
            vec![result(1, 5, 150), result(1, 5, -3)]
        );
        assert_eq!(store.highest_score(5).await.unwrap(), 150);
    }

    #[tokio::test]
    async fn test_results_filtered_in_submission_order() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();
        store.add_student(student(2, "Bob")).await.unwrap();
        store.add_test(test_def(5, 100)).await.unwrap();
        store.add_test(test_def(6, 100)).await.unwrap();

        store.submit_result(result(1, 5, 80)).await.unwrap();
        store.submit_result(result(2, 6, 60)).await.unwrap();
        store.submit_result(result(1, 6, 90)).await.unwrap();
        store.submit_result(result(2, 5, 100)).await.unwrap();

        assert_eq!(
            store.results_by_student(1).await.unwrap(),
            vec![result(1, 5, 80), result(1, 6, 90)]
        );
        assert_eq!(
            store.results_by_test(5).await.unwrap(),
            vec![result(1, 5, 80), result(2, 5, 100)]
        );
        assert!(store.results_by_student(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_aggregates() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();
        store.add_student(student(2, "Bob")).await.unwrap();
        store.add_test(test_def(5, 100)).await.unwrap();

        store.submit_result(result(1, 5, 80)).await.unwrap();
        store.submit_result(result(2, 5, 100)).await.unwrap();

        assert_eq!(store.average_score(5).await.unwrap(), 90.0);
        assert_eq!(store.highest_score(5).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_average_is_not_truncated() {
        let store = InMemoryGradebookStore::new();
        store.add_student(student(1, "Alice")).await.unwrap();
        store.add_test(test_def(5, 100)).await.unwrap();

        for score in [1, 2, 2] {
            store.submit_result(result(1, 5, score)).await.unwrap();
        }

        let avg = store.average_score(5).await.unwrap();
        assert!((avg - 5.0 / 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_aggregates_without_results() {
        let store = InMemoryGradebookStore::new();
        store.add_test(test_def(5, 100)).await.unwrap();

        assert_eq!(
            store.average_score(5).await.unwrap_err(),
            DomainError::no_results()
        );
        assert_eq!(
            store.highest_score(5).await.unwrap_err(),
            DomainError::no_results()
        );
        // Unknown test behaves the same as a test with no results
        assert!(matches!(
            store.highest_score(404).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_serialized() {
        let store = std::sync::Arc::new(InMemoryGradebookStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add_student(student(i % 8, "Dup")).await })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 8);
        assert_eq!(store.list_students().await.unwrap().len(), 8);
    }
}
