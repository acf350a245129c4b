pub mod client;
pub mod engineer;
pub mod offer;
