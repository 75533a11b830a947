// Result submission handler orchestrates the write flow.
//
// Responsibilities
// - Check that the referenced student and test are both registered.
// - Call the decider to validate the score against the test.
// - Append the result to the ledger and record the test on the student.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::decide::decide_submit;
use crate::core::model::TestResult;
use crate::core::ports::{ResultLedger, StudentRegistry, TestRegistry};

pub struct SubmitResultHandler<S, T, L>
where
    S: StudentRegistry,
    T: TestRegistry,
    L: ResultLedger,
{
    students: Arc<S>,
    tests: Arc<T>,
    ledger: Arc<L>,
}

impl<S, T, L> SubmitResultHandler<S, T, L>
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

    pub async fn handle(&self, result: TestResult) -> Result<TestResult, ApplicationError> {
        // Either missing reference surfaces as the same NotFound kind.
        self.students.get(result.student_id).await?;
        let test = self.tests.get(result.test_id).await?;
        decide_submit(&test, result.score)?;

        self.ledger.append(result.clone()).await?;
        self.students
            .push_test_taken(result.student_id, result.test_id)
            .await?;
        Ok(result)
    }
}
