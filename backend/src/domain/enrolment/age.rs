//! Validated school ages.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EnrolmentValidationError;

/// Minimum age, in years, at which a child may be enrolled.
pub const MIN_SCHOOL_AGE: i32 = 6;

/// An age that is guaranteed to be at or above [`MIN_SCHOOL_AGE`].
///
/// # Examples
/// ```
/// use backend::domain::SchoolAge;
///
/// let age = SchoolAge::new(10).expect("old enough");
/// assert_eq!(age.years(), 10);
/// assert!(SchoolAge::new(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct SchoolAge(i32);

impl SchoolAge {
    /// Validate and construct a [`SchoolAge`] from a raw age in years.
    pub const fn new(years: i32) -> Result<Self, EnrolmentValidationError> {
        if years < MIN_SCHOOL_AGE {
            return Err(EnrolmentValidationError::BelowSchoolAge {
                years,
                min: MIN_SCHOOL_AGE,
            });
        }
        Ok(Self(years))
    }

    /// The validated age in years.
    pub const fn years(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SchoolAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SchoolAge> for i32 {
    fn from(value: SchoolAge) -> Self {
        value.years()
    }
}

impl TryFrom<i32> for SchoolAge {
    type Error = EnrolmentValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(6, true)]
    #[case(7, true)]
    #[case(18, true)]
    #[case(5, false)]
    #[case(0, false)]
    #[case(-1, false)]
    fn minimum_age_enforced(#[case] years: i32, #[case] should_succeed: bool) {
        let result = SchoolAge::new(years);
        assert_eq!(result.is_ok(), should_succeed, "years: {years}");
        if let Ok(age) = result {
            assert_eq!(age.years(), years);
        }
    }

    #[test]
    fn rejection_reports_value_and_threshold() {
        let err = SchoolAge::new(3).expect_err("below minimum");
        assert_eq!(
            err,
            EnrolmentValidationError::BelowSchoolAge { years: 3, min: 6 }
        );
        let message = err.to_string();
        assert!(message.contains('3'));
        assert!(message.contains('6'));
    }

    #[test]
    fn serde_routes_through_validation() {
        let age: SchoolAge = serde_json::from_str("10").expect("valid payload");
        assert_eq!(age.years(), 10);

        let rejected: Result<SchoolAge, _> = serde_json::from_str("2");
        assert!(rejected.is_err());
    }
}
