use crate::domain::schema::{Access, FieldDescriptor, FieldType};
use std::fmt;

// Backing storage for the `&'static` descriptors `Record::field` returns.
static FIELDS: [FieldDescriptor; 3] = Record::SCHEMA;

/// Generated record with one read-only and two read/write fields.
///
/// Fields are private so the layout cannot be extended and `field_a` has no
/// write path outside [`Record::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    field_a: i64,
    field_b: String,
    field_c: bool,
}

impl Record {
    /// Declared fields, in constructor argument order.
    pub const SCHEMA: [FieldDescriptor; 3] = [
        FieldDescriptor::new("field_a", FieldType::Integer, Access::ReadOnly),
        FieldDescriptor::new("field_b", FieldType::Text, Access::ReadWrite),
        FieldDescriptor::new("field_c", FieldType::Boolean, Access::ReadWrite),
    ];

    pub fn new(field_a: i64, field_b: impl Into<String>, field_c: bool) -> Self {
        Self {
            field_a,
            field_b: field_b.into(),
            field_c,
        }
    }

    pub fn field(name: &str) -> Option<&'static FieldDescriptor> {
        FIELDS.iter().find(|descriptor| descriptor.name == name)
    }

    pub fn field_a(&self) -> i64 {
        self.field_a
    }

    pub fn field_b(&self) -> &str {
        &self.field_b
    }

    pub fn field_c(&self) -> bool {
        self.field_c
    }

    pub fn set_field_b(&mut self, value: impl Into<String>) {
        self.field_b = value.into();
    }

    pub fn set_field_c(&mut self, value: bool) {
        self.field_c = value;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record {{ field_a: {}, field_b: {:?}, field_c: {} }}",
            self.field_a, self.field_b, self.field_c
        )
    }
}
