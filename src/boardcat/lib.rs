//! # Boardcat Architecture
//!
//! Boardcat is a **UI-agnostic faceted filter** for hardware catalogs: boards
//! and shields, each described by a name, architectures, vendor, SoCs,
//! supported hardware features and compatible strings. A documentation page,
//! a terminal, or anything else can drive it; the bundled binary is just one
//! client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints cards and counts                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - FacetEngine: one per filtering widget                    │
//! │  - change → cascade → evaluate → encode, as one step        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facet Layer (facets/)                                      │
//! │  - State store, cascading options, predicate, URL codec     │
//! │  - Pure functions over plain values                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Store (store/)                                     │
//! │  - CatalogStore trait                                       │
//! │  - FileCatalog (JSON), InMemoryCatalog (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail-Soft Filtering
//!
//! Nothing a user types or pastes into a URL can produce an error. Unknown
//! tags, stale SoC selections, unknown fragment keys and the like are dropped
//! where they enter. The only errors are setup errors: a catalog or config
//! file that cannot be read.
//!
//! ## Testing Strategy
//!
//! 1. **Facets** (`facets/*.rs`): unit tests of each rule, where most tests live.
//! 2. **API** (`api.rs`): end-to-end scenarios over small in-memory catalogs.
//! 3. **CLI** (`tests/`): the binary against catalog files in a temp dir.
//!
//! ## Module Overview
//!
//! - [`api`]: `FacetEngine`, the entry point for all operations
//! - [`facets`]: filter state and the rules over it
//! - [`store`]: catalog sources
//! - [`model`]: `Card`, `SocHierarchy`, `Vocabulary`
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod config;
pub mod error;
pub mod facets;
pub mod model;
pub mod store;
