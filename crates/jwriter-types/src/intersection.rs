use serde::{Deserialize, Serialize};

use crate::{TypeName, TypeNameError};

/// `A & B & ...`, satisfied only by types satisfying every bound.
///
/// Appears either as the single bound of a type variable (when the type source reports
/// intersections wrapped) or on its own, e.g. as the target of an intersection cast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntersectionRepr")]
pub struct IntersectionTypeName {
    bounds: Vec<TypeName>,
}

#[derive(Deserialize)]
struct IntersectionRepr {
    bounds: Vec<TypeName>,
}

impl TryFrom<IntersectionRepr> for IntersectionTypeName {
    type Error = TypeNameError;

    fn try_from(repr: IntersectionRepr) -> Result<Self, Self::Error> {
        IntersectionTypeName::new(repr.bounds)
    }
}

impl IntersectionTypeName {
    pub fn new(bounds: impl IntoIterator<Item = TypeName>) -> Result<Self, TypeNameError> {
        let bounds: Vec<TypeName> = bounds.into_iter().collect();
        if bounds.len() < 2 {
            return Err(TypeNameError::IntersectionArity { len: bounds.len() });
        }
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> &[TypeName] {
        &self.bounds
    }

    pub fn into_bounds(self) -> Vec<TypeName> {
        self.bounds
    }
}
