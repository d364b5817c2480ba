//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::EnrolmentService;
use crate::domain::ports::EnrolmentStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Boundary service handling enrolment requests.
    pub enrolment: EnrolmentService,
}

impl HttpState {
    /// Assemble the handler state around the given store.
    pub fn new(store: Arc<dyn EnrolmentStore>) -> Self {
        Self {
            enrolment: EnrolmentService::new(store),
        }
    }
}
