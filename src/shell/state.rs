use std::sync::Arc;

use crate::adapters::in_memory::in_memory_ledger::InMemoryLedger;
use crate::adapters::in_memory::in_memory_students::InMemoryStudents;
use crate::adapters::in_memory::in_memory_tests::InMemoryTests;
use crate::application::command_handlers::submit_result::SubmitResultHandler;
use crate::application::query_handlers::result_queries::ResultQueries;
use crate::core::ports::{StudentRegistry, TestRegistry};

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRegistry>,
    pub tests: Arc<dyn TestRegistry>,
    pub submit_handler: Arc<SubmitResultHandler<InMemoryStudents, InMemoryTests, InMemoryLedger>>,
    pub results: Arc<ResultQueries<InMemoryStudents, InMemoryTests, InMemoryLedger>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        let students = Arc::new(InMemoryStudents::new());
        let tests = Arc::new(InMemoryTests::new());
        let ledger = Arc::new(InMemoryLedger::new());

        let submit_handler = Arc::new(SubmitResultHandler::new(
            students.clone(),
            tests.clone(),
            ledger.clone(),
        ));
        let results = Arc::new(ResultQueries::new(students.clone(), tests.clone(), ledger));

        Self {
            students,
            tests,
            submit_handler,
            results,
        }
    }
}
