//! # Catalog Store
//!
//! Where the engine gets its input from. The [`CatalogStore`] trait lets the
//! engine run against a catalog file in production and a plain value in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: a JSON catalog file
//!   - `cards`: card records, structured or as attribute maps
//!   - `socs`: the `family → series → SoCs` hierarchy
//!
//! - [`memory::InMemoryCatalog`]: a [`Catalog`] held in memory, for tests
//!
//! ## File Format
//!
//! ```text
//! {
//!   "cards": [
//!     { "name": "nRF52840 DK", "arch": "arm", "vendor": "nordic",
//!       "socs": "nrf52840", "supported-features": "gpio spi",
//!       "compatibles": "nordic,nrf52840-dk" },
//!     { "name": "Sensor Shield", "shield": "true" }
//!   ],
//!   "socs": { "Nordic": { "nRF52": ["nrf52832", "nrf52840"] } }
//! }
//! ```
//!
//! A catalog that cannot be loaded is a setup failure: the engine is never built.

use crate::error::Result;
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Read-only source of a catalog.
pub trait CatalogStore {
    /// Load the cards and the SoC hierarchy.
    fn load(&self) -> Result<Catalog>;
}
