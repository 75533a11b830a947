// Read side for results: listings and per-test aggregates.
//
// Responsibilities
// - Check the referenced registry entry before scanning the ledger.
// - Compute the average and highest score over the matching ledger entries.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::model::TestResult;
use crate::core::ports::{ResultLedger, StudentRegistry, TestRegistry};

pub struct ResultQueries<S, T, L>
where
    S: StudentRegistry,
    T: TestRegistry,
    L: ResultLedger,
{
    students: Arc<S>,
    tests: Arc<T>,
    ledger: Arc<L>,
}

impl<S, T, L> ResultQueries<S, T, L>
where
    S: StudentRegistry,
    T: TestRegistry,
    L: ResultLedger,
{
    pub fn new(students: Arc<S>, tests: Arc<T>, ledger: Arc<L>) -> Self {
        Self {
            students,
            tests,
            ledger,
        }
    }

    pub async fn list_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<TestResult>, ApplicationError> {
        self.students.get(student_id).await?;
        Ok(self.ledger.list_by_student(student_id).await?)
    }

    pub async fn list_by_test(&self, test_id: i64) -> Result<Vec<TestResult>, ApplicationError> {
        self.tests.get(test_id).await?;
        Ok(self.ledger.list_by_test(test_id).await?)
    }

    pub async fn average(&self, test_id: i64) -> Result<f64, ApplicationError> {
        let scores = self.scores(test_id).await?;
        Ok(scores.iter().sum::<i64>() as f64 / scores.len() as f64)
    }

    pub async fn highest(&self, test_id: i64) -> Result<i64, ApplicationError> {
        let scores = self.scores(test_id).await?;
        scores
            .into_iter()
            .max()
            .ok_or(ApplicationError::NoData(test_id))
    }

    async fn scores(&self, test_id: i64) -> Result<Vec<i64>, ApplicationError> {
        self.tests.get(test_id).await?;
        let scores: Vec<i64> = self
            .ledger
            .list_by_test(test_id)
            .await?
            .into_iter()
            .map(|r| r.score)
            .collect();
        if scores.is_empty() {
            return Err(ApplicationError::NoData(test_id));
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod result_queries_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_ledger::InMemoryLedger;
    use crate::adapters::in_memory::in_memory_students::InMemoryStudents;
    use crate::adapters::in_memory::in_memory_tests::InMemoryTests;
    use crate::test_support::fixtures::{result, student, test_with_max_score};
    use rstest::{fixture, rstest};

    type Queries = ResultQueries<InMemoryStudents, InMemoryTests, InMemoryLedger>;

    #[fixture]
    fn before_each() -> (Queries, Arc<InMemoryLedger>) {
        let students = Arc::new(InMemoryStudents::new());
        let tests = Arc::new(InMemoryTests::new());
        let ledger = Arc::new(InMemoryLedger::new());
        let queries = ResultQueries::new(students, tests, ledger.clone());
        (queries, ledger)
    }

    async fn register_fixtures(queries: &Queries) {
        queries.students.insert(student(1)).await.unwrap();
        queries.students.insert(student(2)).await.unwrap();
        queries
            .tests
            .insert(test_with_max_score(101, 100))
            .await
            .unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_results_by_student_in_ledger_order(
        before_each: (Queries, Arc<InMemoryLedger>),
    ) {
        let (queries, ledger) = before_each;
        register_fixtures(&queries).await;
        ledger.append(result(1, 101, 85)).await.unwrap();
        ledger.append(result(2, 101, 92)).await.unwrap();
        ledger.append(result(1, 101, 45)).await.unwrap();

        let listed = queries.list_by_student(1).await.unwrap();
        assert_eq!(listed, vec![result(1, 101, 85), result(1, 101, 45)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_list_for_an_unknown_student(
        before_each: (Queries, Arc<InMemoryLedger>),
    ) {
        let (queries, _) = before_each;
        register_fixtures(&queries).await;

        assert_eq!(
            queries.list_by_student(9).await,
            Err(ApplicationError::NotFound(9))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_results_by_test_even_when_empty(
        before_each: (Queries, Arc<InMemoryLedger>),
    ) {
        let (queries, _) = before_each;
        register_fixtures(&queries).await;

        assert_eq!(queries.list_by_test(101).await.unwrap(), Vec::new());
    }

    #[rstest]
    #[case(vec![85], 85.0)]
    #[case(vec![85, 92], 88.5)]
    #[tokio::test]
    async fn it_should_compute_the_arithmetic_mean(
        before_each: (Queries, Arc<InMemoryLedger>),
        #[case] scores: Vec<i64>,
        #[case] expected: f64,
    ) {
        let (queries, ledger) = before_each;
        register_fixtures(&queries).await;
        for score in scores {
            ledger.append(result(1, 101, score)).await.unwrap();
        }

        assert_eq!(queries.average(101).await.unwrap(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_compute_the_highest_score(before_each: (Queries, Arc<InMemoryLedger>)) {
        let (queries, ledger) = before_each;
        register_fixtures(&queries).await;
        ledger.append(result(1, 101, 45)).await.unwrap();
        ledger.append(result(2, 101, 85)).await.unwrap();

        assert_eq!(queries.highest(101).await.unwrap(), 85);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_no_data_for_aggregates_without_results(
        before_each: (Queries, Arc<InMemoryLedger>),
    ) {
        let (queries, _) = before_each;
        register_fixtures(&queries).await;

        assert_eq!(queries.average(101).await, Err(ApplicationError::NoData(101)));
        assert_eq!(queries.highest(101).await, Err(ApplicationError::NoData(101)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_aggregates_for_an_unknown_test(
        before_each: (Queries, Arc<InMemoryLedger>),
    ) {
        let (queries, _) = before_each;
        register_fixtures(&queries).await;

        assert_eq!(
            queries.average(999).await,
            Err(ApplicationError::NotFound(999))
        );
    }
}
