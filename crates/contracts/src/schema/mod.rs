pub mod field;
pub mod registry;

pub use field::{FieldDescriptor, FieldKind, SelectChoice};
