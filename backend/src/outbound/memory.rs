//! In-memory enrolment store.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::info;

use crate::domain::Student;
use crate::domain::ports::{EnrolmentStore, EnrolmentStoreError};

/// Stores validated students in process memory.
///
/// Each save appends under a lock, so concurrent enrolments never observe a
/// partially written record. Only already-validated [`Student`] values can
/// reach this adapter.
#[derive(Debug, Default)]
pub struct InMemoryEnrolmentStore {
    students: Mutex<Vec<Student>>,
}

impl InMemoryEnrolmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every student saved so far.
    pub fn students(&self) -> Vec<Student> {
        self.students
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EnrolmentStore for InMemoryEnrolmentStore {
    async fn save_student(&self, student: &Student) -> Result<(), EnrolmentStoreError> {
        self.students
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(student.clone());
        info!(student = %student, "student recorded in memory");
        Ok(())
    }
}
