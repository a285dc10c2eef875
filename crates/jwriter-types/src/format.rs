//! Stable, Java-like rendering of type names.
//!
//! Names are always fully qualified and nothing is imported or abbreviated; this is for
//! diagnostics and test output, not for emitting source.

use std::fmt;

use crate::{
    ArrayTypeName, ClassName, IntersectionTypeName, ParameterizedTypeName, PrimitiveName,
    TypeName, TypeVariableName,
};

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Primitive(p) => fmt::Display::fmt(p, f),
            TypeName::Void => f.write_str("void"),
            TypeName::Null => f.write_str("null"),
            TypeName::Class(class) => fmt::Display::fmt(class, f),
            TypeName::Array(array) => fmt::Display::fmt(array, f),
            TypeName::Parameterized(parameterized) => fmt::Display::fmt(parameterized, f),
            TypeName::TypeVariable(var) => fmt::Display::fmt(var, f),
            TypeName::Intersection(intersection) => fmt::Display::fmt(intersection, f),
        }
    }
}

impl fmt::Display for PrimitiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl fmt::Display for ArrayTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[]", self.component_type())
    }
}

impl fmt::Display for ParameterizedTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.raw_type())?;
        write_joined(f, self.type_arguments(), ", ")?;
        f.write_str(">")
    }
}

/// Use-site form: just the variable's name. See [`TypeVariableName::declaration`].
impl fmt::Display for TypeVariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for IntersectionTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.bounds(), " & ")
    }
}

impl TypeVariableName {
    /// Declaration-site form, e.g. `T extends java.lang.Comparable<T>`.
    pub fn declaration(&self) -> String {
        if self.is_unbounded() {
            return self.name().to_string();
        }
        let bounds = self
            .bounds()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" & ");
        format!("{} extends {bounds}", self.name())
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, types: &[TypeName], sep: &str) -> fmt::Result {
    for (idx, ty) in types.iter().enumerate() {
        if idx > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}
