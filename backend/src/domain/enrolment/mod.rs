//! Student enrolment domain.
//!
//! Purpose: turn raw enrolment requests into validated domain values whose
//! invalid states cannot be constructed. Each scalar wrapper enforces one
//! invariant through its sole constructor; [`Student::parse`] composes them
//! into a fully validated aggregate, so everything downstream of the parse
//! handles trusted data only.
//!
//! Public surface:
//! - [`StudentName`] — name matching the student name pattern.
//! - [`SchoolAge`] — age at or above the minimum school age.
//! - [`Course`] — member of the fixed course catalogue.
//! - [`Student`] / [`EnrolmentRequest`] — validated aggregate and raw draft.
//! - [`EnrolmentService`] — parse-then-save orchestration at the boundary.

pub mod age;
pub mod course;
pub mod name;
pub mod service;
pub mod student;

pub use self::age::{MIN_SCHOOL_AGE, SchoolAge};
pub use self::course::Course;
pub use self::name::StudentName;
pub use self::service::EnrolmentService;
pub use self::student::{EnrolmentRequest, Student};

use thiserror::Error;

/// Validation failures raised while constructing enrolment domain values.
///
/// Every variant is a recoverable, data-dependent failure; none is fatal.
/// Messages carry the offending input so adapters can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrolmentValidationError {
    /// The name does not match the student name pattern.
    #[error("name {name:?} is not a valid student name")]
    InvalidName {
        /// The rejected raw input.
        name: String,
    },
    /// The age is below the minimum school age.
    #[error("not ready for school at age {years}; minimum school age is {min}")]
    BelowSchoolAge {
        /// The rejected age in years.
        years: i32,
        /// The minimum school age the value was checked against.
        min: i32,
    },
    /// The course is not part of the fixed catalogue.
    #[error("not a valid course: {course}")]
    UnknownCourse {
        /// The rejected raw input.
        course: String,
    },
    /// The course set was empty.
    #[error("student must be enrolled in at least one course")]
    NoCourses,
}
