// Shared fixture constructors for unit tests.

use crate::core::model::{Student, Test, TestResult};

pub fn student(id: i64) -> Student {
    Student {
        id,
        name: format!("Student {id}"),
        email: format!("student{id}@example.com"),
        tests_taken: Vec::new(),
    }
}

pub fn test_with_max_score(id: i64, max_score: i64) -> Test {
    Test {
        id,
        name: format!("Test {id}"),
        max_score,
    }
}

pub fn result(student_id: i64, test_id: i64, score: i64) -> TestResult {
    TestResult {
        student_id,
        test_id,
        score,
    }
}
