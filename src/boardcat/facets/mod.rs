//! # Facet Layer
//!
//! Pure filtering logic. Nothing in here touches the filesystem, the terminal
//! or the page: every function takes the catalog data and a [`FacetState`] as
//! plain arguments and returns plain values.
//!
//! - [`store`]: the only place a [`FacetState`] is mutated
//! - [`cascade`]: family → series → SoC option narrowing and pruning
//! - [`predicate`]: per-card match evaluation
//! - [`wildcard`]: `*` patterns for compatible strings
//! - [`codec`]: the URL fragment form of a [`FacetState`]

use serde::Serialize;
use std::collections::BTreeSet;

pub mod cascade;
pub mod codec;
pub mod predicate;
pub mod store;
pub mod wildcard;

/// The complete set of user-selected facet values.
///
/// Empty/unset dimensions do not constrain the result. `hardware_tags` and
/// `compatible_patterns` are ordered sets: insertion order is kept and
/// duplicates are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetState {
    pub name_query: String,
    pub architecture: Option<String>,
    pub vendor: Option<String>,
    pub families: BTreeSet<String>,
    pub series: BTreeSet<String>,
    pub socs: BTreeSet<String>,
    pub hardware_tags: Vec<String>,
    pub compatible_patterns: Vec<String>,
    pub show_boards: bool,
    pub show_shields: bool,
}

impl Default for FacetState {
    fn default() -> Self {
        Self {
            name_query: String::new(),
            architecture: None,
            vendor: None,
            families: BTreeSet::new(),
            series: BTreeSet::new(),
            socs: BTreeSet::new(),
            hardware_tags: Vec::new(),
            compatible_patterns: Vec::new(),
            show_boards: true,
            show_shields: true,
        }
    }
}

impl FacetState {
    /// True when no dimension constrains the catalog.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A new value for one single-select, text, multi-select or toggle dimension.
///
/// Tags and compatible patterns are edited one at a time through the store's
/// add/remove operations instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetValue {
    Name(String),
    Architecture(Option<String>),
    Vendor(Option<String>),
    Families(Vec<String>),
    Series(Vec<String>),
    Socs(Vec<String>),
    ShowBoards(bool),
    ShowShields(bool),
}

impl FacetValue {
    pub fn dimension(&self) -> &'static str {
        match self {
            FacetValue::Name(_) => "name",
            FacetValue::Architecture(_) => "arch",
            FacetValue::Vendor(_) => "vendor",
            FacetValue::Families(_) => "family",
            FacetValue::Series(_) => "series",
            FacetValue::Socs(_) => "soc",
            FacetValue::ShowBoards(_) => "show-boards",
            FacetValue::ShowShields(_) => "show-shields",
        }
    }
}
