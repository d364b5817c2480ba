//! Driven adapters implementing domain ports.
//!
//! Real deployments would plug persistence or messaging adapters in here;
//! this crate ships an in-memory store suitable for demos and tests.

pub mod memory;

pub use self::memory::InMemoryEnrolmentStore;
