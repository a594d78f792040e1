mod family;
mod index;
mod loader;

pub use family::EditionFamily;
pub use index::{entry_name_is_valid, CatalogIndex};
pub use loader::{CatalogLoader, LoadedCatalog};
