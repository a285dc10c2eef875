//! JVM naming conventions for already-compiled classes.
//!
//! A loaded class is identified either by a descriptor (`I`, `[Ljava/lang/Object;`, `V`) or by
//! the name `Class.getName()` reports (`int`, `[Ljava.lang.Object;`, `java.util.Map$Entry`).
//! Both parse into a [`ClassRef`].

#![forbid(unsafe_code)]

mod class_ref;
mod descriptor;
mod error;

pub use crate::class_ref::ClassRef;
pub use crate::descriptor::{parse_class_descriptor, BaseType};
pub use crate::error::{Error, Result};
