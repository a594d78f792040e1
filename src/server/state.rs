use std::sync::Arc;

use crate::catalog::CatalogIndex;

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<CatalogIndex>,
}
