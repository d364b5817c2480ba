//! Enrolment HTTP handlers.
//!
//! ```text
//! POST /api/v1/enrolments
//! POST /api/v1/enrolments/auto
//! ```
//!
//! These handlers are the boundary: the only place where raw request bodies
//! and validated domain values are in scope together.

use std::collections::BTreeSet;

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EnrolmentRequest, Student};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// Request payload for enrolling a student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrolRequestBody {
    /// Raw student name.
    #[schema(example = "Alice")]
    pub name: String,
    /// Raw age in years.
    #[schema(example = 10)]
    pub age: i32,
    /// Raw course names; duplicates collapse into a set.
    pub courses: Vec<String>,
}

/// Request payload for the automatic child enrolment path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoEnrolRequestBody {
    /// Raw child name.
    #[schema(example = "Robin")]
    pub name: String,
}

/// Validated student as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentBody {
    /// Validated student name.
    pub name: String,
    /// Validated age in years.
    pub age: i32,
    /// Catalogue names of the enrolled courses, in deterministic order.
    pub courses: Vec<String>,
}

impl From<&Student> for StudentBody {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name().as_str().to_owned(),
            age: student.age().years(),
            courses: student
                .courses()
                .iter()
                .map(|course| course.as_str().to_owned())
                .collect(),
        }
    }
}

/// Response payload for successful enrolments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrolResponseBody {
    /// Always `"accepted"` on the success path.
    #[schema(example = "accepted")]
    pub status: String,
    /// The validated aggregate for the caller's own downstream use.
    pub student: StudentBody,
}

impl EnrolResponseBody {
    fn accepted(student: &Student) -> Self {
        Self {
            status: "accepted".to_owned(),
            student: student.into(),
        }
    }
}

/// Enrol a student from a raw request body.
#[utoipa::path(
    post,
    path = "/api/v1/enrolments",
    request_body = EnrolRequestBody,
    responses(
        (status = 201, description = "Student enrolled", body = EnrolResponseBody),
        (status = 400, description = "Request failed validation", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["enrolments"],
    operation_id = "enrolStudent"
)]
#[post("/enrolments")]
pub async fn enrol(
    state: web::Data<HttpState>,
    body: web::Json<EnrolRequestBody>,
) -> ApiResult<HttpResponse> {
    let EnrolRequestBody { name, age, courses } = body.into_inner();
    let request = EnrolmentRequest {
        name,
        age,
        courses: courses.into_iter().collect::<BTreeSet<_>>(),
    };

    let student = state.enrolment.enrol(request).await?;
    Ok(HttpResponse::Created().json(EnrolResponseBody::accepted(&student)))
}

/// Enrol a child automatically with the base course set.
#[utoipa::path(
    post,
    path = "/api/v1/enrolments/auto",
    request_body = AutoEnrolRequestBody,
    responses(
        (status = 201, description = "Child enrolled with base courses", body = EnrolResponseBody),
        (status = 400, description = "Name failed validation", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["enrolments"],
    operation_id = "autoEnrolChild"
)]
#[post("/enrolments/auto")]
pub async fn auto_enrol(
    state: web::Data<HttpState>,
    body: web::Json<AutoEnrolRequestBody>,
) -> ApiResult<HttpResponse> {
    let student = state.enrolment.auto_enrol_child(body.into_inner().name).await?;
    Ok(HttpResponse::Created().json(EnrolResponseBody::accepted(&student)))
}
