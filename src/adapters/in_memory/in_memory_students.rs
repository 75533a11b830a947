// In memory implementation of the StudentRegistry port.
//
// Purpose
// - Back the student endpoints without a database.
//
// Responsibilities
// - Keep one record per id and reject duplicate registrations.
// - Serialize access through a single lock per collection.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::core::model::Student;
use crate::core::ports::{RegistryError, StudentRegistry};

#[derive(Default)]
pub struct InMemoryStudents {
    inner: RwLock<HashMap<i64, Student>>,
}

impl InMemoryStudents {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StudentRegistry for InMemoryStudents {
    async fn insert(&self, student: Student) -> Result<Student, RegistryError> {
        let mut guard = self.inner.write().await;
        if guard.contains_key(&student.id) {
            return Err(RegistryError::DuplicateKey(student.id));
        }
        guard.insert(student.id, student.clone());
        Ok(student)
    }

    async fn get(&self, id: i64) -> Result<Student, RegistryError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    async fn list(&self) -> anyhow::Result<Vec<Student>> {
        let guard = self.inner.read().await;
        let mut items: Vec<Student> = guard.values().cloned().collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    async fn remove(&self, id: i64) -> Result<(), RegistryError> {
        let mut guard = self.inner.write().await;
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or(RegistryError::NotFound(id))
    }

    async fn push_test_taken(&self, id: i64, test_id: i64) -> Result<(), RegistryError> {
        let mut guard = self.inner.write().await;
        let student = guard.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        student.tests_taken.push(test_id);
        Ok(())
    }
}
