pub mod connections;
pub mod licenses;
pub mod rows;

pub use connections::ConnectionsEditor;
pub use licenses::LicensesEditor;
pub use rows::RowsEditor;
