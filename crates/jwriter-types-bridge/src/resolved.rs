use std::borrow::Cow;

use jwriter_classfile::{BaseType, ClassRef};
use jwriter_types::PrimitiveName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedKind {
    Primitive(PrimitiveName),
    /// The `void` pseudo-class. `java.lang.Void` is [`ResolvedKind::Named`].
    Void,
    Array,
    Named,
}

/// A reference to an already-loaded class, independent of any compilation.
pub trait ResolvedClass {
    fn kind(&self) -> ResolvedKind;

    /// The name `Class.getName()` reports, e.g. `java.util.Map$Entry`.
    fn name(&self) -> Cow<'_, str>;

    /// Component class of an array.
    fn component_type(&self) -> Option<Self>
    where
        Self: Sized;
}

impl ResolvedClass for ClassRef {
    fn kind(&self) -> ResolvedKind {
        match self {
            ClassRef::Primitive(base) => ResolvedKind::Primitive(primitive(*base)),
            ClassRef::Void => ResolvedKind::Void,
            ClassRef::Array(_) => ResolvedKind::Array,
            ClassRef::Object(_) => ResolvedKind::Named,
        }
    }

    fn name(&self) -> Cow<'_, str> {
        match self {
            ClassRef::Object(binary_name) => Cow::Borrowed(binary_name),
            other => Cow::Owned(other.name()),
        }
    }

    fn component_type(&self) -> Option<Self> {
        ClassRef::component_type(self).cloned()
    }
}

fn primitive(base: BaseType) -> PrimitiveName {
    match base {
        BaseType::Byte => PrimitiveName::Byte,
        BaseType::Char => PrimitiveName::Char,
        BaseType::Double => PrimitiveName::Double,
        BaseType::Float => PrimitiveName::Float,
        BaseType::Int => PrimitiveName::Int,
        BaseType::Long => PrimitiveName::Long,
        BaseType::Short => PrimitiveName::Short,
        BaseType::Boolean => PrimitiveName::Boolean,
    }
}
