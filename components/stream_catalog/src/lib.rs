mod catalog;
mod error;

pub use catalog::{Station, StreamCatalog};
pub use error::CatalogError;
