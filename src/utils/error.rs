use crate::domain::schema::FieldType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("type mismatch for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: String,
    },

    #[error("field '{field}' is read-only")]
    ReadOnlyField { field: String },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("missing field '{field}'")]
    MissingField { field: String },
}

impl RecordError {
    pub fn type_mismatch(field: &str, expected: FieldType, found: impl ToString) -> Self {
        RecordError::TypeMismatch {
            field: field.to_string(),
            expected,
            found: found.to_string(),
        }
    }

    /// Name of the field the failing call addressed.
    pub fn field(&self) -> &str {
        match self {
            RecordError::TypeMismatch { field, .. }
            | RecordError::ReadOnlyField { field }
            | RecordError::UnknownField { field }
            | RecordError::MissingField { field } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
