//! The validated student aggregate and its parser.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::NonEmptySet;

use super::{Course, EnrolmentValidationError, SchoolAge, StudentName};

/// Raw enrolment request as received at the boundary.
///
/// Nothing here is trusted; [`Student::parse`] is the only path from this
/// draft to domain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolmentRequest {
    /// Raw student name.
    pub name: String,
    /// Raw age in years.
    pub age: i32,
    /// Raw course names, unordered and unique.
    pub courses: BTreeSet<String>,
}

/// A fully validated student.
///
/// Exists only if every constituent is valid: the name matches the student
/// name pattern, the age is at or above the minimum school age, and the
/// course set is non-empty with every member in the catalogue. There is no
/// raw-field constructor and no mutator, so a `Student` can never drift back
/// into an invalid state.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use backend::domain::{EnrolmentRequest, Student};
///
/// let request = EnrolmentRequest {
///     name: "Alice".into(),
///     age: 10,
///     courses: BTreeSet::from(["Maths".to_owned(), "Art".to_owned()]),
/// };
/// let student = Student::parse(request).expect("valid request");
/// assert_eq!(student.name().as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: StudentName,
    age: SchoolAge,
    courses: NonEmptySet<Course>,
}

impl Student {
    /// Assemble a student from already-validated components.
    pub fn new(name: StudentName, age: SchoolAge, courses: NonEmptySet<Course>) -> Self {
        Self { name, age, courses }
    }

    /// Parse a raw enrolment request into a validated student.
    ///
    /// Fails fast: constituents are validated in the fixed order name, age,
    /// then courses, and the first violation aborts the parse and becomes
    /// the reported reason. No partially valid aggregate is ever observable.
    pub fn parse(request: EnrolmentRequest) -> Result<Self, EnrolmentValidationError> {
        let name = StudentName::new(request.name)?;
        let age = SchoolAge::new(request.age)?;
        let courses = request
            .courses
            .into_iter()
            .map(Course::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let courses =
            NonEmptySet::new(courses).map_err(|_| EnrolmentValidationError::NoCourses)?;

        Ok(Self::new(name, age, courses))
    }

    /// The student's validated name.
    pub fn name(&self) -> &StudentName {
        &self.name
    }

    /// The student's validated age.
    pub fn age(&self) -> SchoolAge {
        self.age
    }

    /// The non-empty set of courses the student is enrolled in.
    pub fn courses(&self) -> &NonEmptySet<Course> {
        &self.courses
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.age, self.courses)
    }
}

#[cfg(test)]
mod tests;
