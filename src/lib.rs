pub mod domain;
pub mod utils;

pub use domain::binding::FieldValue;
pub use domain::model::Record;
pub use domain::schema::{Access, FieldDescriptor, FieldType};
pub use utils::error::{RecordError, Result};
