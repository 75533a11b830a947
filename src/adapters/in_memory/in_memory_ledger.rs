// In memory implementation of the ResultLedger port.
//
// Responsibilities
// - Append results in submission order and never mutate or delete them.
// - Serve the per-student and per-test scans in ledger order.

use tokio::sync::RwLock;

use crate::core::model::TestResult;
use crate::core::ports::ResultLedger;

#[derive(Default)]
pub struct InMemoryLedger {
    inner: RwLock<Vec<TestResult>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ResultLedger for InMemoryLedger {
    async fn append(&self, result: TestResult) -> anyhow::Result<()> {
        self.inner.write().await.push(result);
        Ok(())
    }

    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<TestResult>> {
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_by_test(&self, test_id: i64) -> anyhow::Result<Vec<TestResult>> {
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .filter(|r| r.test_id == test_id)
            .cloned()
            .collect())
    }
}
