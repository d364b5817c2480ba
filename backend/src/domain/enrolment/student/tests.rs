//! Regression coverage for the student aggregate parser.

use std::collections::BTreeSet;

use rstest::rstest;

use super::*;

fn request(name: &str, age: i32, courses: &[&str]) -> EnrolmentRequest {
    EnrolmentRequest {
        name: name.to_owned(),
        age,
        courses: courses.iter().map(|&c| c.to_owned()).collect(),
    }
}

#[test]
fn valid_request_parses_into_a_student() {
    let student =
        Student::parse(request("Alice", 10, &["Maths", "Art"])).expect("request is valid");

    assert_eq!(student.name().as_str(), "Alice");
    assert_eq!(student.age().years(), 10);
    assert_eq!(student.courses().len(), 2);
    assert!(student.courses().contains(&Course::Maths));
    assert!(student.courses().contains(&Course::Art));
}

#[test]
fn underage_request_fails_with_the_range_violation() {
    let err = Student::parse(request("Alice", 3, &["Maths"])).expect_err("age below minimum");

    assert_eq!(
        err,
        EnrolmentValidationError::BelowSchoolAge { years: 3, min: 6 }
    );
    let message = err.to_string();
    assert!(message.contains('3'));
    assert!(message.contains('6'));
}

#[test]
fn empty_course_set_fails_with_the_cardinality_violation() {
    let err = Student::parse(request("Alice", 10, &[])).expect_err("no courses");
    assert_eq!(err, EnrolmentValidationError::NoCourses);
}

#[test]
fn unknown_course_fails_with_the_membership_violation() {
    let err =
        Student::parse(request("Alice", 10, &["Maths", "Alchemy"])).expect_err("unknown course");
    assert_eq!(
        err,
        EnrolmentValidationError::UnknownCourse {
            course: "Alchemy".to_owned()
        }
    );
}

#[rstest]
#[case(request("", 3, &[]))]
#[case(request("4lice", 0, &["Alchemy"]))]
fn parse_fails_fast_on_the_name_when_everything_is_invalid(#[case] request: EnrolmentRequest) {
    // Name is first in evaluation order, so its violation masks the age and
    // course violations also present in the request.
    let err = Student::parse(request).expect_err("nothing is valid");
    assert!(matches!(err, EnrolmentValidationError::InvalidName { .. }));
}

#[test]
fn age_violation_masks_course_violations() {
    let err = Student::parse(request("Alice", 3, &["Alchemy"])).expect_err("age checked first");
    assert!(matches!(
        err,
        EnrolmentValidationError::BelowSchoolAge { .. }
    ));
}

#[test]
fn reparsing_unwrapped_values_is_idempotent() {
    let first = Student::parse(request("Alice", 10, &["Maths"])).expect("valid request");

    let names: Vec<&str> = first.courses().iter().map(|c| c.as_str()).collect();
    let second = Student::parse(EnrolmentRequest {
        name: first.name().as_str().to_owned(),
        age: first.age().years(),
        courses: names.into_iter().map(str::to_owned).collect(),
    })
    .expect("already valid");

    assert_eq!(first, second);
}

#[test]
fn course_order_in_the_aggregate_is_deterministic() {
    let student =
        Student::parse(request("Alice", 10, &["Music", "Art", "Maths"])).expect("valid request");

    let names: Vec<&str> = student.courses().iter().map(|c| c.as_str()).collect();
    assert_eq!(names, ["Maths", "Art", "Music"]);
}

#[test]
fn display_summarises_the_aggregate() {
    let student = Student::parse(request("Alice", 10, &["Maths", "Art"])).expect("valid request");
    assert_eq!(student.to_string(), "Alice (10) {Maths, Art}");
}

#[test]
fn deserialisation_cannot_bypass_validation() {
    let rejected: Result<Student, _> = serde_json::from_str(
        r#"{"name": "Alice", "age": 3, "courses": ["Maths"]}"#,
    );
    assert!(rejected.is_err());

    let accepted: Student = serde_json::from_str(
        r#"{"name": "Alice", "age": 10, "courses": ["Maths"]}"#,
    )
    .expect("valid payload");
    assert_eq!(accepted.age().years(), 10);
}
