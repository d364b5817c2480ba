//! HTTP adapter: request/response types, handlers, and error mapping.
//!
//! Handlers depend only on [`state::HttpState`] and the domain, so they are
//! testable without network I/O.

pub mod enrolments;
pub mod error;
pub mod health;
pub mod state;

#[cfg(test)]
mod enrolments_tests;

pub use self::error::{ApiError, ApiResult};
