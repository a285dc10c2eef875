use jwriter_types::TypeNameError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The type source handed over something that breaks its own contract, e.g. an array
    /// without a component type or a declared type without an element.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported type kind: {0}")]
    UnsupportedTypeKind(String),
    #[error(transparent)]
    MalformedName(#[from] TypeNameError),
}
