// Fixed startup data. The service boots with two students, two tests and
// three results; everything else arrives through the API. State is
// process-lifetime only and lost on shutdown.

use crate::application::errors::ApplicationError;
use crate::core::model::{Student, Test, TestResult};
use crate::core::ports::{StudentRegistry, TestRegistry};
use crate::shell::state::AppState;

pub async fn seed(state: &AppState) -> Result<(), ApplicationError> {
    let students = [
        Student {
            id: 1,
            name: "Ali Akbarov".into(),
            email: "ali@example.com".into(),
            tests_taken: Vec::new(),
        },
        Student {
            id: 2,
            name: "Zarina Ismailova".into(),
            email: "zarina@example.com".into(),
            tests_taken: Vec::new(),
        },
    ];
    let tests = [
        Test {
            id: 101,
            name: "Mathematics Exam".into(),
            max_score: 100,
        },
        Test {
            id: 102,
            name: "Chemistry Quiz".into(),
            max_score: 50,
        },
    ];
    let results = [
        TestResult {
            student_id: 1,
            test_id: 101,
            score: 85,
        },
        TestResult {
            student_id: 2,
            test_id: 101,
            score: 92,
        },
        TestResult {
            student_id: 1,
            test_id: 102,
            score: 45,
        },
    ];

    for student in students {
        state.students.insert(student).await?;
    }
    for test in tests {
        state.tests.insert(test).await?;
    }
    // Submitted through the regular flow so tests_taken matches the ledger.
    for result in results {
        state.submit_handler.handle(result).await?;
    }

    tracing::info!("seeded 2 students, 2 tests, 3 results");
    Ok(())
}
