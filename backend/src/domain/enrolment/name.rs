//! Validated student names.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::EnrolmentValidationError;

/// Pattern a student name must satisfy: a leading letter followed by
/// letters, spaces, apostrophes, or hyphens.
pub const STUDENT_NAME_PATTERN: &str = "^[A-Za-z][A-Za-z '-]*$";

static STUDENT_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn student_name_regex() -> &'static Regex {
    STUDENT_NAME_RE.get_or_init(|| {
        Regex::new(STUDENT_NAME_PATTERN)
            .unwrap_or_else(|error| panic!("student name regex failed to compile: {error}"))
    })
}

/// A student's name, guaranteed to match [`STUDENT_NAME_PATTERN`].
///
/// The validating constructor is the only way to obtain an instance, and the
/// wrapped string is read-only afterwards, so holders never re-check the
/// format. Serde deserialisation routes through the same constructor.
///
/// # Examples
/// ```
/// use backend::domain::StudentName;
///
/// let name = StudentName::new("Alice").expect("valid name");
/// assert_eq!(name.as_str(), "Alice");
/// assert!(StudentName::new("4lice").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentName(String);

impl StudentName {
    /// Validate and construct a [`StudentName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, EnrolmentValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, EnrolmentValidationError> {
        if !student_name_regex().is_match(&name) {
            return Err(EnrolmentValidationError::InvalidName { name });
        }
        Ok(Self(name))
    }

    /// Borrow the validated name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StudentName> for String {
    fn from(value: StudentName) -> Self {
        value.0
    }
}

impl TryFrom<String> for StudentName {
    type Error = EnrolmentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
