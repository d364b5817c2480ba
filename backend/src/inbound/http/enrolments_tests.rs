//! Tests for enrolment HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use crate::domain::ports::FixtureEnrolmentStore;
use crate::inbound::http::enrolments::{auto_enrol, enrol};
use crate::inbound::http::state::HttpState;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(FixtureEnrolmentStore));
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").service(enrol).service(auto_enrol))
}

async fn post_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    payload: Value,
) -> (StatusCode, Value) {
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[actix_rt::test]
async fn valid_enrolment_returns_created_with_the_aggregate() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/enrolments",
        json!({ "name": "Alice", "age": 10, "courses": ["Music", "Maths"] }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("status"), Some(&json!("accepted")));
    let student = body.get("student").expect("student payload");
    assert_eq!(student.get("name"), Some(&json!("Alice")));
    assert_eq!(student.get("age"), Some(&json!(10)));
    assert_eq!(student.get("courses"), Some(&json!(["Maths", "Music"])));
}

#[actix_rt::test]
async fn duplicate_courses_collapse_into_a_set() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/enrolments",
        json!({ "name": "Alice", "age": 10, "courses": ["Art", "Art", "Art"] }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let courses = body
        .get("student")
        .and_then(|s| s.get("courses"))
        .expect("courses payload");
    assert_eq!(courses, &json!(["Art"]));
}

#[actix_rt::test]
async fn underage_request_is_rejected_with_the_range_violation() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/enrolments",
        json!({ "name": "Alice", "age": 3, "courses": ["Maths"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .expect("message payload");
    assert!(message.contains('3'));
    assert!(message.contains('6'));
    assert_eq!(
        body.get("details").and_then(|d| d.get("code")),
        Some(&json!("below_school_age"))
    );
}

#[actix_rt::test]
async fn empty_course_list_is_rejected_with_the_cardinality_violation() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/enrolments",
        json!({ "name": "Alice", "age": 10, "courses": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("details").and_then(|d| d.get("code")),
        Some(&json!("no_courses"))
    );
}

#[actix_rt::test]
async fn fully_invalid_request_reports_the_name_violation_first() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/enrolments",
        json!({ "name": "", "age": 3, "courses": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("details").and_then(|d| d.get("field")),
        Some(&json!("name"))
    );
}

#[actix_rt::test]
async fn auto_enrolment_assigns_the_base_courses() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/enrolments/auto",
        json!({ "name": "Robin" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let student = body.get("student").expect("student payload");
    assert_eq!(student.get("age"), Some(&json!(7)));
    assert_eq!(student.get("courses"), Some(&json!(["Maths", "Music"])));
}
