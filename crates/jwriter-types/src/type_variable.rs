use serde::{Deserialize, Serialize};

use crate::TypeName;

/// A type variable with its declared upper bounds.
///
/// An empty bound list means the implicit `java.lang.Object` bound. A bound may mention the
/// variable itself (`T extends Comparable<T>`); that inner occurrence carries no bounds of its
/// own, which keeps the value a finite tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariableName {
    name: String,
    #[serde(default)]
    bounds: Vec<TypeName>,
}

impl TypeVariableName {
    /// An unbounded variable.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn new(name: impl Into<String>, bounds: Vec<TypeName>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[TypeName] {
        &self.bounds
    }

    pub fn is_unbounded(&self) -> bool {
        self.bounds.is_empty()
    }
}
