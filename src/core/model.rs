// Domain records for the student testing system.
//
// Responsibilities
// - Describe the shapes held by the registries and the ledger.
// - No behavior beyond serialization; validation lives in the decider and handlers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub tests_taken: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: i64,
    pub name: String,
    pub max_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub student_id: i64,
    pub test_id: i64,
    pub score: i64,
}
