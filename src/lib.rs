pub mod catalog;
pub mod common;
pub mod config;
pub mod domain;
pub mod observability;
pub mod server;

pub use catalog::{CatalogIndex, CatalogLoader, EditionFamily, LoadedCatalog};
pub use common::error::{CatalogError, Result};
