use serde::{Deserialize, Serialize};

use crate::{ClassName, TypeName, TypeNameError};

/// A generic class applied to type arguments, e.g. `java.util.Set<java.lang.Object>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ParameterizedRepr")]
pub struct ParameterizedTypeName {
    raw_type: ClassName,
    type_arguments: Vec<TypeName>,
}

#[derive(Deserialize)]
struct ParameterizedRepr {
    raw_type: ClassName,
    type_arguments: Vec<TypeName>,
}

impl TryFrom<ParameterizedRepr> for ParameterizedTypeName {
    type Error = TypeNameError;

    fn try_from(repr: ParameterizedRepr) -> Result<Self, Self::Error> {
        ParameterizedTypeName::new(repr.raw_type, repr.type_arguments)
    }
}

impl ParameterizedTypeName {
    /// Arguments keep the order given. A raw type with no arguments is a plain [`ClassName`],
    /// so an empty list is rejected.
    pub fn new(
        raw_type: ClassName,
        type_arguments: impl IntoIterator<Item = TypeName>,
    ) -> Result<Self, TypeNameError> {
        let type_arguments: Vec<TypeName> = type_arguments.into_iter().collect();
        if type_arguments.is_empty() {
            return Err(TypeNameError::EmptyTypeArguments {
                raw: raw_type.canonical_name(),
            });
        }
        Ok(Self {
            raw_type,
            type_arguments,
        })
    }

    pub fn raw_type(&self) -> &ClassName {
        &self.raw_type
    }

    pub fn type_arguments(&self) -> &[TypeName] {
        &self.type_arguments
    }
}
