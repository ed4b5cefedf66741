// Domain layer: the generated record, its field table and the dynamic binding.

pub mod binding;
pub mod model;
pub mod schema;
