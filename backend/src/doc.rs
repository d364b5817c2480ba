//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: all HTTP endpoints from the inbound layer (enrolments,
//!   health)
//! - **Schemas**: the request/response bodies and the error envelope
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::enrolments::{
    AutoEnrolRequestBody, EnrolRequestBody, EnrolResponseBody, StudentBody,
};
use crate::inbound::http::error::ApiError;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Enrolment backend API",
        description = "HTTP interface for validated student enrolment and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::enrolments::enrol,
        crate::inbound::http::enrolments::auto_enrol,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EnrolRequestBody,
        AutoEnrolRequestBody,
        EnrolResponseBody,
        StudentBody,
        ApiError,
    ))
)]
pub struct ApiDoc;
