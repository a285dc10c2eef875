//! Utilities shared by jwriter tests.
//!
//! [`FakeTypes`] is a small arena-backed stand-in for a compiler's type model, enough to
//! drive `jwriter_types_bridge::from_live_type` without a running compiler.

mod fake_types;
mod tracing_init;

pub use fake_types::{ElementId, FakeTypes, TypeId};
pub use tracing_init::init_tracing;
