//! Parse-then-save orchestration for enrolment requests.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{error, info};

use crate::domain::ports::EnrolmentStore;
use crate::domain::{DomainError, EnrolmentRequest, EnrolmentValidationError, Student};

/// Age assigned to children enrolled through the automatic path.
const AUTO_ENROL_AGE: i32 = 7;

/// Courses every automatically enrolled child starts with.
const BASE_COURSES: [&str; 2] = ["Music", "Maths"];

/// Boundary service that turns raw requests into stored students.
///
/// This is the only place where raw input and validated data are in scope
/// at the same time: the request is parsed exactly once, and only the
/// resulting [`Student`] reaches the store. Validation failures come back
/// as structured [`DomainError`]s; nothing here panics or raises past the
/// boundary.
#[derive(Clone)]
pub struct EnrolmentService {
    store: Arc<dyn EnrolmentStore>,
}

impl EnrolmentService {
    /// Build a service around the given store.
    pub fn new(store: Arc<dyn EnrolmentStore>) -> Self {
        Self { store }
    }

    /// Parse a raw enrolment request and record the validated student.
    ///
    /// On success the validated aggregate is returned for the caller's own
    /// downstream use.
    pub async fn enrol(&self, request: EnrolmentRequest) -> Result<Student, DomainError> {
        let student = Student::parse(request).map_err(|err| validation_error(&err))?;

        self.store.save_student(&student).await.map_err(|err| {
            error!(error = %err, "enrolment store rejected a validated student");
            DomainError::internal("enrolment could not be recorded")
        })?;

        info!(student = %student, "student enrolled");
        Ok(student)
    }

    /// Enrol a child automatically with the base course set.
    ///
    /// The draft goes through the same parse-then-save path as any other
    /// request, so an invalid name still fails in the usual structured way.
    pub async fn auto_enrol_child(
        &self,
        name: impl Into<String>,
    ) -> Result<Student, DomainError> {
        let request = EnrolmentRequest {
            name: name.into(),
            age: AUTO_ENROL_AGE,
            courses: BASE_COURSES.iter().map(|&c| c.to_owned()).collect::<BTreeSet<_>>(),
        };
        self.enrol(request).await
    }
}

/// Map a validation failure to the structured domain error adapters expect.
fn validation_error(err: &EnrolmentValidationError) -> DomainError {
    DomainError::invalid_request(err.to_string()).with_details(validation_details(err))
}

fn validation_details(err: &EnrolmentValidationError) -> Value {
    match err {
        EnrolmentValidationError::InvalidName { name } => json!({
            "field": "name",
            "value": name,
            "code": "invalid_name",
        }),
        EnrolmentValidationError::BelowSchoolAge { years, min } => json!({
            "field": "age",
            "value": years,
            "min": min,
            "code": "below_school_age",
        }),
        EnrolmentValidationError::UnknownCourse { course } => json!({
            "field": "courses",
            "value": course,
            "code": "unknown_course",
        }),
        EnrolmentValidationError::NoCourses => json!({
            "field": "courses",
            "code": "no_courses",
        }),
    }
}
