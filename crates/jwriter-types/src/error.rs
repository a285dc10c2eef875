use thiserror::Error;

/// A type name that would violate the model's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeNameError {
    #[error("malformed name `{name}`: {reason}")]
    MalformedName { name: String, reason: &'static str },
    #[error("parameterized type `{raw}` has no type arguments")]
    EmptyTypeArguments { raw: String },
    #[error("intersection type needs at least two bounds, got {len}")]
    IntersectionArity { len: usize },
}

impl TypeNameError {
    pub(crate) fn malformed(name: impl Into<String>, reason: &'static str) -> Self {
        TypeNameError::MalformedName {
            name: name.into(),
            reason,
        }
    }
}
