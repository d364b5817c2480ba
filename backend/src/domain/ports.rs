//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (databases, queues, notification fan-out). Each trait exposes strongly
//! typed errors so adapters map their failures into predictable variants.
//! Persistence and eventing themselves live behind these ports and are out
//! of scope for the domain: a store accepts exactly one validated
//! [`Student`] per call and owns its own failure modes.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::Student;

/// Errors surfaced by the enrolment store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrolmentStoreError {
    /// Connectivity or transaction failures.
    #[error("enrolment store connection failed: {message}")]
    Connection {
        /// Adapter-provided description of the failure.
        message: String,
    },
    /// Catch-all for write failures that bubble up from the adapter.
    #[error("enrolment store write failed: {message}")]
    Write {
        /// Adapter-provided description of the failure.
        message: String,
    },
}

impl EnrolmentStoreError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Port through which validated students leave the domain.
///
/// Implementations persist the student and notify downstream consumers; the
/// domain only guarantees that every value handed over has already passed
/// [`Student::parse`].
#[async_trait]
pub trait EnrolmentStore: Send + Sync {
    /// Record a validated student.
    async fn save_student(&self, student: &Student) -> Result<(), EnrolmentStoreError>;
}

/// No-op store used by tests and examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEnrolmentStore;

#[async_trait]
impl EnrolmentStore for FixtureEnrolmentStore {
    async fn save_student(&self, student: &Student) -> Result<(), EnrolmentStoreError> {
        info!(student = %student, "fixture store discarded student");
        Ok(())
    }
}
