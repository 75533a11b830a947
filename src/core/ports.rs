// Ports define what the application needs from the collections, without implementing it.
//
// Purpose
// - Describe the three collections as traits: two registries and one ledger.
//
// Responsibilities
// - Keep handlers independent of the storage choice by coding against traits.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::model::{Student, Test, TestResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("id {0} is already registered")]
    DuplicateKey(i64),

    #[error("id {0} is not registered")]
    NotFound(i64),
}

#[async_trait]
pub trait StudentRegistry: Send + Sync {
    async fn insert(&self, student: Student) -> Result<Student, RegistryError>;
    async fn get(&self, id: i64) -> Result<Student, RegistryError>;
    async fn list(&self) -> anyhow::Result<Vec<Student>>;
    async fn remove(&self, id: i64) -> Result<(), RegistryError>;
    // Appends to the student's tests_taken. Only the submit flow calls this.
    async fn push_test_taken(&self, id: i64, test_id: i64) -> Result<(), RegistryError>;
}

#[async_trait]
pub trait TestRegistry: Send + Sync {
    async fn insert(&self, test: Test) -> Result<Test, RegistryError>;
    async fn get(&self, id: i64) -> Result<Test, RegistryError>;
    async fn list(&self) -> anyhow::Result<Vec<Test>>;
}

#[async_trait]
pub trait ResultLedger: Send + Sync {
    async fn append(&self, result: TestResult) -> anyhow::Result<()>;
    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<TestResult>>;
    async fn list_by_test(&self, test_id: i64) -> anyhow::Result<Vec<TestResult>>;
}
