use serde::{Deserialize, Serialize};

use crate::ClassName;

/// One of Java's eight primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveName {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveName {
    pub const ALL: [PrimitiveName; 8] = [
        PrimitiveName::Boolean,
        PrimitiveName::Byte,
        PrimitiveName::Short,
        PrimitiveName::Int,
        PrimitiveName::Long,
        PrimitiveName::Char,
        PrimitiveName::Float,
        PrimitiveName::Double,
    ];

    /// The source keyword, e.g. `int`.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveName::Boolean => "boolean",
            PrimitiveName::Byte => "byte",
            PrimitiveName::Short => "short",
            PrimitiveName::Int => "int",
            PrimitiveName::Long => "long",
            PrimitiveName::Char => "char",
            PrimitiveName::Float => "float",
            PrimitiveName::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// The JVM descriptor character, e.g. `I` for `int` and `Z` for `boolean`.
    pub fn descriptor(self) -> char {
        match self {
            PrimitiveName::Boolean => 'Z',
            PrimitiveName::Byte => 'B',
            PrimitiveName::Short => 'S',
            PrimitiveName::Int => 'I',
            PrimitiveName::Long => 'J',
            PrimitiveName::Char => 'C',
            PrimitiveName::Float => 'F',
            PrimitiveName::Double => 'D',
        }
    }

    pub fn from_descriptor(descriptor: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.descriptor() == descriptor)
    }

    /// The `java.lang` wrapper class, e.g. `java.lang.Integer` for `int`.
    pub fn boxed(self) -> ClassName {
        let simple = match self {
            PrimitiveName::Boolean => "Boolean",
            PrimitiveName::Byte => "Byte",
            PrimitiveName::Short => "Short",
            PrimitiveName::Int => "Integer",
            PrimitiveName::Long => "Long",
            PrimitiveName::Char => "Character",
            PrimitiveName::Float => "Float",
            PrimitiveName::Double => "Double",
        };
        ClassName::java_lang(simple)
    }
}
