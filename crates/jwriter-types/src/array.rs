use serde::{Deserialize, Serialize};

use crate::TypeName;

/// `component[]`. Multi-dimensional arrays nest: `int[][]` is an array of `int[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayTypeName {
    component_type: Box<TypeName>,
}

impl ArrayTypeName {
    pub fn new(component_type: impl Into<TypeName>) -> Self {
        Self {
            component_type: Box::new(component_type.into()),
        }
    }

    pub fn component_type(&self) -> &TypeName {
        &self.component_type
    }

    pub fn into_component_type(self) -> TypeName {
        *self.component_type
    }

    /// Number of `[]` pairs, counting nested arrays.
    pub fn dimensions(&self) -> usize {
        let mut dims = 1;
        let mut component = self.component_type();
        while let TypeName::Array(inner) = component {
            dims += 1;
            component = inner.component_type();
        }
        dims
    }

    /// The non-array type at the bottom of the nesting.
    pub fn element_type(&self) -> &TypeName {
        let mut component = self.component_type();
        while let TypeName::Array(inner) = component {
            component = inner.component_type();
        }
        component
    }
}
