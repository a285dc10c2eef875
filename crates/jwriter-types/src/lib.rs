//! Canonical type names for generated Java source.
//!
//! [`TypeName`] is a closed sum over the eight shapes a Java type can take at a use site or in a
//! type parameter declaration. Values are immutable trees with structural equality and hashing,
//! so an emitter can deduplicate them, use them as map keys and render them without knowing
//! whether they came from a compiler's type model or from a loaded class.
//!
//! This crate only models names. Building them from live type sources lives in
//! `jwriter-types-bridge`.

#![forbid(unsafe_code)]

mod array;
mod class_name;
mod error;
mod format;
mod intersection;
mod parameterized;
mod primitive;
mod type_variable;

use serde::{Deserialize, Serialize};

pub use crate::array::ArrayTypeName;
pub use crate::class_name::ClassName;
pub use crate::error::TypeNameError;
pub use crate::intersection::IntersectionTypeName;
pub use crate::parameterized::ParameterizedTypeName;
pub use crate::primitive::PrimitiveName;
pub use crate::type_variable::TypeVariableName;

/// Any type that can be named in Java source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeName {
    Primitive(PrimitiveName),
    /// `void`. Distinct from the boxed `java.lang.Void` class.
    Void,
    /// The type of the `null` literal.
    Null,
    Class(ClassName),
    Array(ArrayTypeName),
    Parameterized(ParameterizedTypeName),
    TypeVariable(TypeVariableName),
    Intersection(IntersectionTypeName),
}

impl TypeName {
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeName::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeName::Array(_))
    }

    /// `self[]`.
    pub fn array_of(self) -> TypeName {
        TypeName::Array(ArrayTypeName::new(self))
    }

    /// Visit `self` and every nested type name in pre-order.
    ///
    /// Type variable bounds are visited as stored. The converter never produces cyclic trees (a
    /// self-referential bound holds a bound-less copy of the variable), so the walk always ends.
    pub fn walk(&self, f: &mut dyn FnMut(&TypeName)) {
        f(self);
        match self {
            TypeName::Primitive(_) | TypeName::Void | TypeName::Null | TypeName::Class(_) => {}
            TypeName::Array(array) => array.component_type().walk(f),
            TypeName::Parameterized(parameterized) => {
                for arg in parameterized.type_arguments() {
                    arg.walk(f);
                }
            }
            TypeName::TypeVariable(var) => {
                for bound in var.bounds() {
                    bound.walk(f);
                }
            }
            TypeName::Intersection(intersection) => {
                for bound in intersection.bounds() {
                    bound.walk(f);
                }
            }
        }
    }

    /// Primitive kinds contained in this tree, in first-seen order without duplicates.
    pub fn primitives(&self) -> Vec<PrimitiveName> {
        let mut out = Vec::new();
        self.walk(&mut |ty| {
            if let TypeName::Primitive(p) = ty {
                if !out.contains(p) {
                    out.push(*p);
                }
            }
        });
        out
    }

    /// Every class this tree refers to, including raw types of parameterized types, in
    /// first-seen order without duplicates.
    ///
    /// This is what an import pass needs; nested classes are reported as-is and it is up to the
    /// caller to import their top-level class instead.
    pub fn referenced_classes(&self) -> Vec<ClassName> {
        let mut out: Vec<ClassName> = Vec::new();
        let mut push = |class: &ClassName| {
            if !out.contains(class) {
                out.push(class.clone());
            }
        };
        self.walk(&mut |ty| match ty {
            TypeName::Class(class) => push(class),
            TypeName::Parameterized(parameterized) => push(parameterized.raw_type()),
            _ => {}
        });
        out
    }
}

impl From<PrimitiveName> for TypeName {
    fn from(value: PrimitiveName) -> Self {
        TypeName::Primitive(value)
    }
}

impl From<ClassName> for TypeName {
    fn from(value: ClassName) -> Self {
        TypeName::Class(value)
    }
}

impl From<ArrayTypeName> for TypeName {
    fn from(value: ArrayTypeName) -> Self {
        TypeName::Array(value)
    }
}

impl From<ParameterizedTypeName> for TypeName {
    fn from(value: ParameterizedTypeName) -> Self {
        TypeName::Parameterized(value)
    }
}

impl From<TypeVariableName> for TypeName {
    fn from(value: TypeVariableName) -> Self {
        TypeName::TypeVariable(value)
    }
}

impl From<IntersectionTypeName> for TypeName {
    fn from(value: IntersectionTypeName) -> Self {
        TypeName::Intersection(value)
    }
}
