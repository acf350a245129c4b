pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use input::{Input, NumberInput};
pub use select::Select;
pub use textarea::Textarea;
