use crate::domain::binding::FieldValue;
use crate::utils::error::{RecordError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Integer,
    Text,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Text => "string",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access modifier the record compiler attaches to each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Set by the constructor, never written afterwards.
    ReadOnly,
    ReadWrite,
}

/// One entry of a record's static field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
    pub access: Access,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, field_type: FieldType, access: Access) -> Self {
        Self {
            name,
            field_type,
            access,
        }
    }

    pub fn is_writable(&self) -> bool {
        self.access == Access::ReadWrite
    }

    pub fn check(&self, value: &FieldValue) -> Result<()> {
        if value.field_type() != self.field_type {
            return Err(RecordError::type_mismatch(
                self.name,
                self.field_type,
                value.field_type(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_declared_type() {
        let descriptor = FieldDescriptor::new("field_c", FieldType::Boolean, Access::ReadWrite);
        assert!(descriptor.check(&FieldValue::Boolean(false)).is_ok());
        assert!(descriptor.is_writable());
    }

    #[test]
    fn test_check_rejects_other_types() {
        let descriptor = FieldDescriptor::new("field_a", FieldType::Integer, Access::ReadOnly);
        let err = descriptor
            .check(&FieldValue::Text("42".to_string()))
            .unwrap_err();

        assert_eq!(
            err,
            RecordError::TypeMismatch {
                field: "field_a".to_string(),
                expected: FieldType::Integer,
                found: "string".to_string(),
            }
        );
        assert!(!descriptor.is_writable());
    }
}
