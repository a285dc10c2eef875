use std::fmt;
use std::hash::Hash;

use jwriter_types::PrimitiveName;
use serde::{Deserialize, Serialize};

/// What a live type handle is, as reported by the compiler's type model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiveKind {
    Primitive(PrimitiveName),
    Void,
    Null,
    Array,
    /// A class or interface type, with or without type arguments.
    Declared,
    TypeVariable,
    Intersection,
    Wildcard,
    Union,
    Executable,
    Package,
    Module,
    Error,
    /// The "no type" marker, e.g. the superclass of `java.lang.Object`.
    None,
}

impl fmt::Display for LiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiveKind::Primitive(p) => return write!(f, "primitive `{}`", p.keyword()),
            LiveKind::Void => "void",
            LiveKind::Null => "null",
            LiveKind::Array => "array",
            LiveKind::Declared => "declared",
            LiveKind::TypeVariable => "type variable",
            LiveKind::Intersection => "intersection",
            LiveKind::Wildcard => "wildcard",
            LiveKind::Union => "union",
            LiveKind::Executable => "executable",
            LiveKind::Package => "package",
            LiveKind::Module => "module",
            LiveKind::Error => "error",
            LiveKind::None => "none",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    /// A class, interface, enum or annotation type.
    Type,
    /// A type parameter. Only reached as the declaring element of a type variable.
    TypeParameter,
    /// Methods, fields and anything else that can enclose a local class.
    Other,
}

/// How a type source reports the upper bound of `T extends A & B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundConvention {
    /// The bounds become the variable's bound list directly: `[A, B]`.
    Flatten,
    /// The variable gets a single intersection bound: `[A & B]`.
    Wrap,
}

impl BoundConvention {
    /// The convention `javac` uses for a given feature release. Java 8 and later report
    /// `T extends A & B` as one intersection bound; older releases report the bounds individually.
    pub fn for_release(release: u16) -> Self {
        if release >= 8 {
            BoundConvention::Wrap
        } else {
            BoundConvention::Flatten
        }
    }
}

/// Read access to a compiler's in-memory type model.
///
/// `Type` and `Element` are handles into that model. Element handles must compare equal exactly
/// when they denote the same declaration: the converter keys its type variable memo table on
/// them.
pub trait LiveTypes {
    type Type: Clone;
    type Element: Clone + Eq + Hash;

    fn kind(&self, ty: &Self::Type) -> LiveKind;

    /// Component type of an array.
    fn component_type(&self, ty: &Self::Type) -> Option<Self::Type>;

    /// The declaring element of a declared type or a type variable.
    fn as_element(&self, ty: &Self::Type) -> Option<Self::Element>;

    /// Type arguments supplied to a declared type, in order. Empty for raw and non-generic use.
    fn type_arguments(&self, ty: &Self::Type) -> Vec<Self::Type>;

    /// Upper bound of a type variable. Unbounded variables report `java.lang.Object`.
    fn upper_bound(&self, ty: &Self::Type) -> Option<Self::Type>;

    /// Constituents of an intersection type, in declaration order.
    fn intersection_bounds(&self, ty: &Self::Type) -> Vec<Self::Type>;

    fn element_kind(&self, element: &Self::Element) -> ElementKind;

    /// Simple name of a type or type parameter element; the fully qualified name of a package.
    fn element_name(&self, element: &Self::Element) -> String;

    fn enclosing_element(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Which bound-reporting convention this model follows.
    fn bound_convention(&self) -> BoundConvention;
}
