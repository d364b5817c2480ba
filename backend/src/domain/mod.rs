//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed, immutable domain values used by the
//! inbound and outbound layers. Raw input becomes domain data only through
//! validating constructors, so everything past this module is trusted.
//!
//! Public surface:
//! - [`Student`] and its constituents — the validated enrolment aggregate.
//! - [`Account`] — closed set of role variants for platform accounts.
//! - [`DomainError`] / [`ErrorCode`] — transport-agnostic failure payload.
//! - [`ports`] — traits the domain expects driven adapters to implement.

pub mod account;
pub mod enrolment;
pub mod error;
pub mod non_empty_set;
pub mod ports;

pub use self::account::{
    Account, BasicUser, CustomerAdmin, OverrideCode, OverrideCodeValidationError,
    SPECIAL_PRIVILEGE, SystemAdmin,
};
pub use self::enrolment::{
    Course, EnrolmentRequest, EnrolmentService, EnrolmentValidationError, MIN_SCHOOL_AGE,
    SchoolAge, Student, StudentName,
};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::non_empty_set::{EmptySetError, NonEmptySet};
