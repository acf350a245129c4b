pub mod hydrate;
pub mod payload;
pub mod record;

pub use record::{CommonFields, FieldValue, FormRecord, OfferForm, Row};
