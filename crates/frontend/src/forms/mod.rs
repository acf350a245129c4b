pub mod editors;
pub mod field_renderer;

pub use field_renderer::FieldControl;
