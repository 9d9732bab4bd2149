use super::CatalogStore;
use crate::error::{BoardcatError, Result};
use crate::model::{Catalog, CatalogDocument};
use std::fs;
use std::path::PathBuf;

/// A catalog stored as one JSON file.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStore for FileCatalog {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(BoardcatError::Catalog(format!(
                "catalog file not found: {}",
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path).map_err(BoardcatError::Io)?;
        let document: CatalogDocument =
            serde_json::from_str(&content).map_err(BoardcatError::Serialization)?;
        document.into_catalog()
    }
}
