//! The fixed course catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EnrolmentValidationError;

/// A course a student may enrol in.
///
/// The catalogue is closed: modelling it as a fieldless enum means a value
/// outside the set cannot exist, so membership is checked exactly once when
/// parsing the raw string.
///
/// # Examples
/// ```
/// use backend::domain::Course;
///
/// let course = Course::new("Maths").expect("in the catalogue");
/// assert_eq!(course.as_str(), "Maths");
/// assert!(Course::new("Alchemy").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Course {
    /// Mathematics.
    Maths,
    /// Physics.
    Physics,
    /// Art.
    Art,
    /// Music.
    Music,
}

impl Course {
    /// Every course in the catalogue.
    pub const CATALOGUE: [Self; 4] = [Self::Maths, Self::Physics, Self::Art, Self::Music];

    /// Validate and construct a [`Course`] from its raw name.
    pub fn new(course: impl AsRef<str>) -> Result<Self, EnrolmentValidationError> {
        course.as_ref().parse()
    }

    /// The catalogue name of the course.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maths => "Maths",
            Self::Physics => "Physics",
            Self::Art => "Art",
            Self::Music => "Music",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = EnrolmentValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Maths" => Ok(Self::Maths),
            "Physics" => Ok(Self::Physics),
            "Art" => Ok(Self::Art),
            "Music" => Ok(Self::Music),
            other => Err(EnrolmentValidationError::UnknownCourse {
                course: other.to_owned(),
            }),
        }
    }
}

impl From<Course> for String {
    fn from(value: Course) -> Self {
        value.as_str().to_owned()
    }
}

impl TryFrom<String> for Course {
    type Error = EnrolmentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Maths", true)]
    #[case("Physics", true)]
    #[case("Art", true)]
    #[case("Music", true)]
    #[case("maths", false)]
    #[case("Alchemy", false)]
    #[case("", false)]
    fn catalogue_membership_enforced(#[case] input: &str, #[case] should_succeed: bool) {
        let result = Course::new(input);
        assert_eq!(result.is_ok(), should_succeed, "input: {input:?}");
    }

    #[test]
    fn rejection_names_the_invalid_value() {
        let err = Course::new("Alchemy").expect_err("not in the catalogue");
        assert_eq!(
            err,
            EnrolmentValidationError::UnknownCourse {
                course: "Alchemy".to_owned()
            }
        );
        assert!(err.to_string().contains("Alchemy"));
    }

    #[test]
    fn catalogue_round_trips_through_names() {
        for course in Course::CATALOGUE {
            let again = Course::new(course.as_str()).expect("catalogue name is valid");
            assert_eq!(again, course);
        }
    }

    #[test]
    fn serde_routes_through_validation() {
        let course: Course = serde_json::from_str(r#""Art""#).expect("valid payload");
        assert_eq!(course, Course::Art);

        let rejected: Result<Course, _> = serde_json::from_str(r#""Needlework""#);
        assert!(rejected.is_err());
    }
}
