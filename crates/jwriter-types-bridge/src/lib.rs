//! Builds [`jwriter_types::TypeName`] trees from the two places Java types come from.
//!
//! - [`from_live_type`]: a compiler's in-memory type model during annotation processing,
//!   reached through the [`LiveTypes`] trait.
//! - [`from_resolved_class`]: an already-loaded class, reached through [`ResolvedClass`]
//!   (implemented for [`jwriter_classfile::ClassRef`]).
//!
//! Both are pure and synchronous. Each call owns its own type-variable memo table, so
//! independent calls can run on different threads without coordination.

#![forbid(unsafe_code)]

mod config;
mod convert;
mod error;
mod live;
mod resolved;

pub use crate::config::{BridgeConfig, ConfigError};
pub use crate::convert::{from_live_type, from_live_type_with, from_resolved_class};
pub use crate::error::{ConvertError, Result};
pub use crate::live::{BoundConvention, ElementKind, LiveKind, LiveTypes};
pub use crate::resolved::{ResolvedClass, ResolvedKind};

/// Tracing target for conversion events.
pub const TRACE_TARGET: &str = "jwriter.bridge";
