use super::CatalogStore;
use crate::error::Result;
use crate::model::Catalog;

/// In-memory catalog for tests. Hands out a clone on every load.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}
