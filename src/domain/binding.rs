//! Dynamic access to [`Record`] for callers holding untyped values.
//!
//! The typed API on [`Record`] rejects mistyped arguments at compile time.
//! Everything here checks the same rules at runtime against
//! [`Record::SCHEMA`] and reports them as [`RecordError`]s.

use crate::domain::model::Record;
use crate::domain::schema::{FieldDescriptor, FieldType};
use crate::utils::error::{RecordError, Result};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Boolean(bool),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Boolean(_) => FieldType::Boolean,
        }
    }

    /// Converts a JSON value bound for the field `descriptor` describes.
    ///
    /// The converted value must also match the field's declared type.
    pub fn from_json(descriptor: &FieldDescriptor, value: &Value) -> Result<Self> {
        let converted = match value {
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None if n.is_f64() => return Err(json_mismatch(descriptor, "float")),
                None => return Err(json_mismatch(descriptor, "out-of-range integer")),
            },
            Value::Null => return Err(json_mismatch(descriptor, "null")),
            Value::Array(_) => return Err(json_mismatch(descriptor, "array")),
            Value::Object(_) => return Err(json_mismatch(descriptor, "object")),
        };
        descriptor.check(&converted)?;
        Ok(converted)
    }

    fn into_integer(self, descriptor: &FieldDescriptor) -> Result<i64> {
        match self {
            FieldValue::Integer(v) if descriptor.field_type == FieldType::Integer => Ok(v),
            other => Err(mismatch(descriptor, &other)),
        }
    }

    fn into_text(self, descriptor: &FieldDescriptor) -> Result<String> {
        match self {
            FieldValue::Text(v) if descriptor.field_type == FieldType::Text => Ok(v),
            other => Err(mismatch(descriptor, &other)),
        }
    }

    fn into_boolean(self, descriptor: &FieldDescriptor) -> Result<bool> {
        match self {
            FieldValue::Boolean(v) if descriptor.field_type == FieldType::Boolean => Ok(v),
            other => Err(mismatch(descriptor, &other)),
        }
    }
}

fn mismatch(descriptor: &FieldDescriptor, value: &FieldValue) -> RecordError {
    RecordError::type_mismatch(descriptor.name, descriptor.field_type, value.field_type())
}

fn json_mismatch(descriptor: &FieldDescriptor, found: &str) -> RecordError {
    RecordError::type_mismatch(descriptor.name, descriptor.field_type, found)
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Integer(i) => Value::from(i),
            FieldValue::Text(s) => Value::String(s),
            FieldValue::Boolean(b) => Value::Bool(b),
        }
    }
}

impl Record {
    /// Builds a record from dynamically typed arguments in schema order.
    ///
    /// Fails on the first argument whose type does not match its field;
    /// no record is produced in that case.
    pub fn try_from_values(
        field_a: FieldValue,
        field_b: FieldValue,
        field_c: FieldValue,
    ) -> Result<Self> {
        let [a, b, c] = &Self::SCHEMA;
        Ok(Self::new(
            field_a.into_integer(a)?,
            field_b.into_text(b)?,
            field_c.into_boolean(c)?,
        ))
    }

    pub fn get(&self, name: &str) -> Result<FieldValue> {
        match name {
            "field_a" => Ok(FieldValue::Integer(self.field_a())),
            "field_b" => Ok(FieldValue::Text(self.field_b().to_string())),
            "field_c" => Ok(FieldValue::Boolean(self.field_c())),
            _ => Err(RecordError::UnknownField {
                field: name.to_string(),
            }),
        }
    }

    /// Writes a field by name. The record is left untouched on error.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let descriptor = Self::field(name).ok_or_else(|| RecordError::UnknownField {
            field: name.to_string(),
        })?;

        if !descriptor.is_writable() {
            return Err(RecordError::ReadOnlyField {
                field: name.to_string(),
            });
        }

        let value = value.into();
        match descriptor.name {
            "field_b" => self.set_field_b(value.into_text(descriptor)?),
            "field_c" => self.set_field_c(value.into_boolean(descriptor)?),
            _ => {
                return Err(RecordError::ReadOnlyField {
                    field: name.to_string(),
                })
            }
        }

        tracing::trace!(field = name, "record field updated");
        Ok(())
    }

    pub fn values(&self) -> [FieldValue; 3] {
        [
            FieldValue::Integer(self.field_a()),
            FieldValue::Text(self.field_b().to_string()),
            FieldValue::Boolean(self.field_c()),
        ]
    }

    /// Projects the record onto a JSON row keyed by field name.
    pub fn to_row(&self) -> Map<String, Value> {
        Self::SCHEMA
            .iter()
            .zip(self.values())
            .map(|(descriptor, value)| (descriptor.name.to_string(), Value::from(value)))
            .collect()
    }
}

impl TryFrom<&Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(row: &Map<String, Value>) -> Result<Self> {
        if let Some(extra) = row.keys().find(|key| Record::field(key.as_str()).is_none()) {
            return Err(RecordError::UnknownField {
                field: extra.clone(),
            });
        }

        let [a, b, c] = Record::SCHEMA.map(|descriptor| {
            row.get(descriptor.name)
                .ok_or_else(|| RecordError::MissingField {
                    field: descriptor.name.to_string(),
                })
                .and_then(|value| FieldValue::from_json(&descriptor, value))
        });

        let record = Record::try_from_values(a?, b?, c?)?;
        tracing::debug!(record = %record, "bound record from row");
        Ok(record)
    }
}
