//! # API Facade
//!
//! [`FacetEngine`] is the single entry point a UI talks to. One engine serves
//! one filtering widget: it owns the catalog, the [`FacetStore`] and the last
//! fragment it produced.
//!
//! ## One Change, One Pass
//!
//! Every UI event becomes one [`FacetChange`] handed to
//! [`FacetEngine::on_facet_changed`], which always runs the same steps in the
//! same order:
//!
//! 1. mutate the store (the cascade prunes series/SoCs inside this step)
//! 2. re-evaluate every card
//! 3. re-encode the fragment
//!
//! and returns everything the UI needs to redraw as a [`FilterOutcome`]. The
//! UI never reads state back out of its own widgets.
//!
//! ## What the API Does NOT Do
//!
//! - No terminal or page I/O: the outcome is data, the UI renders it.
//! - No history: the fragment is meant to replace the current one, never to
//!   push a new entry.
//!
//! Facet operations cannot fail. Only opening a catalog returns errors, since
//! a missing or malformed catalog means the surrounding page is broken.

use crate::error::Result;
use crate::facets::cascade::CascadeOptions;
use crate::facets::codec;
use crate::facets::predicate::{self, FilterSummary};
use crate::facets::store::FacetStore;
use crate::facets::{FacetState, FacetValue};
use crate::model::{Card, Catalog};
use crate::store::CatalogStore;
use serde::Serialize;
use tracing::{debug, info};

pub use crate::facets::predicate::Evaluation;

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetChange {
    Set(FacetValue),
    AddTag(String),
    RemoveTag(String),
    AddCompatible(String),
    RemoveCompatible(String),
    /// Back/forward navigation or a pasted link: replace the state from a fragment.
    Navigate(String),
    Reset,
}

/// Choices the UI should offer for each dimension, given the current state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub architectures: Vec<String>,
    pub vendors: Vec<String>,
    pub families: Vec<String>,
    pub series: Vec<String>,
    pub socs: Vec<String>,
    /// Vocabulary tags not selected yet.
    pub tags: Vec<String>,
}

/// Everything the UI needs after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// One flag per card, in catalog order.
    pub visible: Vec<bool>,
    pub summary: FilterSummary,
    /// Canonical fragment, without `#`. Empty means "clear the fragment".
    pub fragment: String,
    pub options: FacetOptions,
}

impl FilterOutcome {
    /// The cards flagged visible, in catalog order.
    pub fn visible_cards<'a>(&'a self, cards: &'a [Card]) -> impl Iterator<Item = &'a Card> + 'a {
        cards
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(card, shown)| shown.then_some(card))
    }

    /// The cards flagged hidden, in catalog order.
    pub fn hidden_cards<'a>(&'a self, cards: &'a [Card]) -> impl Iterator<Item = &'a Card> + 'a {
        cards
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(card, shown)| (!shown).then_some(card))
    }
}

pub struct FacetEngine {
    catalog: Catalog,
    store: FacetStore,
    fragment: String,
}

impl FacetEngine {
    pub fn new(catalog: Catalog) -> Self {
        let store = FacetStore::new(catalog.hierarchy.clone(), catalog.vocabulary());
        Self {
            catalog,
            store,
            fragment: String::new(),
        }
    }

    /// Loads the catalog from a store. Fails if the catalog cannot be read.
    pub fn open<S: CatalogStore>(source: &S) -> Result<Self> {
        let catalog = source.load()?;
        info!(
            cards = catalog.cards.len(),
            families = catalog.hierarchy.families().count(),
            "catalog loaded"
        );
        Ok(Self::new(catalog))
    }

    pub fn cards(&self) -> &[Card] {
        &self.catalog.cards
    }

    pub fn state(&self) -> &FacetState {
        self.store.state()
    }

    /// The fragment produced by the last change.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Applies one change, then re-evaluates and re-encodes.
    pub fn on_facet_changed(&mut self, change: FacetChange) -> FilterOutcome {
        debug!(?change, "facet changed");
        match change {
            FacetChange::Set(value) => self.store.set(value),
            FacetChange::AddTag(tag) => {
                self.store.add_tag(&tag);
            }
            FacetChange::RemoveTag(tag) => {
                self.store.remove_tag(&tag);
            }
            FacetChange::AddCompatible(pattern) => {
                self.store.add_compatible(&pattern);
            }
            FacetChange::RemoveCompatible(pattern) => {
                self.store.remove_compatible(&pattern);
            }
            FacetChange::Navigate(fragment) => {
                let decoded = codec::decode(
                    &fragment,
                    self.store.vocabulary(),
                    self.store.hierarchy(),
                );
                self.store.load(decoded);
            }
            FacetChange::Reset => self.store.reset(),
        }
        self.refresh()
    }

    /// Evaluates the current state without changing it.
    ///
    /// Used for the first render after the engine is built from a fragment.
    pub fn refresh(&mut self) -> FilterOutcome {
        let Evaluation { visible, summary } = predicate::evaluate(&self.catalog.cards, self.state());
        self.fragment = codec::encode(self.state());
        debug!(%summary, fragment = %self.fragment, "filter pass");

        FilterOutcome {
            visible,
            summary,
            fragment: self.fragment.clone(),
            options: self.options(),
        }
    }

    pub fn options(&self) -> FacetOptions {
        let vocab = self.store.vocabulary();
        let CascadeOptions { series, socs } = self.store.cascade_options();

        FacetOptions {
            architectures: vocab.architectures.iter().cloned().collect(),
            vendors: vocab.vendors.iter().cloned().collect(),
            families: self
                .catalog
                .hierarchy
                .families()
                .map(str::to_string)
                .collect(),
            series,
            socs,
            tags: self.store.tag_choices().cloned().collect(),
        }
    }

    /// Unselected vocabulary tags containing `query`, case-insensitively.
    pub fn suggest_tags(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        self.store
            .tag_choices()
            .filter(|t| t.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SocHierarchy;
    use crate::store::memory::InMemoryCatalog;

    fn two_boards() -> Catalog {
        Catalog::new(
            vec![
                Card::board("Board A")
                    .with_vendor("nordic")
                    .with_arch("arm")
                    .with_socs(&["nrf52840"])
                    .with_features(&["gpio", "spi"]),
                Card::board("Board B")
                    .with_vendor("st")
                    .with_arch("arm")
                    .with_socs(&["stm32f4"])
                    .with_features(&["gpio"]),
            ],
            SocHierarchy::new()
                .with_series("Nordic", "nRF52", &["nrf52832", "nrf52840"])
                .with_series("Nordic", "nRF53", &["nrf5340"])
                .with_series("ST", "STM32F4", &["stm32f4"]),
        )
    }

    fn names<'a>(outcome: &'a FilterOutcome, cards: &'a [Card]) -> Vec<&'a str> {
        outcome
            .visible_cards(cards)
            .map(|c| c.name.as_str())
            .collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn vendor_filter_scenario() {
        let mut engine = FacetEngine::new(two_boards());
        let outcome =
            engine.on_facet_changed(FacetChange::Set(FacetValue::Vendor(Some("nordic".into()))));

        assert_eq!(names(&outcome, engine.cards()), vec!["Board A"]);
        assert_eq!(
            outcome
                .hidden_cards(engine.cards())
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Board B"]
        );
        assert_eq!(
            outcome.summary.to_string(),
            "Showing 1 of 2 boards, 0 of 0 shields"
        );
        assert_eq!(outcome.fragment, "vendor=nordic");
    }

    #[test]
    fn hardware_tag_scenario() {
        let mut engine = FacetEngine::new(two_boards());
        let outcome = engine.on_facet_changed(FacetChange::AddTag("spi".into()));
        assert_eq!(names(&outcome, engine.cards()), vec!["Board A"]);
        assert_eq!(outcome.options.tags, strings(&["gpio"]));
    }

    #[test]
    fn visibility_toggle_scenario() {
        let catalog = Catalog::new(
            vec![Card::board("Board"), Card::shield("Shield")],
            SocHierarchy::new(),
        );
        let mut engine = FacetEngine::new(catalog);
        engine.on_facet_changed(FacetChange::Set(FacetValue::ShowBoards(false)));
        let outcome = engine.on_facet_changed(FacetChange::Set(FacetValue::ShowShields(true)));

        assert_eq!(names(&outcome, engine.cards()), vec!["Shield"]);
        assert_eq!(outcome.fragment, "show-boards=false");
    }

    #[test]
    fn cascading_family_scenario() {
        let mut engine = FacetEngine::new(two_boards());
        let outcome =
            engine.on_facet_changed(FacetChange::Set(FacetValue::Families(strings(&["Nordic"]))));
        assert_eq!(outcome.options.series, strings(&["nRF52", "nRF53"]));
        assert_eq!(
            outcome.options.socs,
            strings(&["nrf52832", "nrf52840", "nrf5340"])
        );

        engine.on_facet_changed(FacetChange::Set(FacetValue::Socs(strings(&["nrf52840"]))));
        assert!(engine.state().socs.contains("nrf52840"));

        let outcome =
            engine.on_facet_changed(FacetChange::Set(FacetValue::Series(strings(&["nRF53"]))));
        assert_eq!(outcome.options.socs, strings(&["nrf5340"]));
        assert!(engine.state().socs.is_empty());
        assert_eq!(outcome.fragment, "");
    }

    #[test]
    fn navigate_replaces_state_from_fragment() {
        let mut engine = FacetEngine::new(two_boards());
        engine.on_facet_changed(FacetChange::Set(FacetValue::Name("board".into())));

        let outcome = engine.on_facet_changed(FacetChange::Navigate(
            "#soc=stm32f4&vendor=acme&tracking=1".into(),
        ));
        assert_eq!(names(&outcome, engine.cards()), vec!["Board B"]);
        assert_eq!(engine.state().name_query, "");
        assert_eq!(engine.state().vendor, None);
        assert_eq!(outcome.fragment, "soc=stm32f4");
    }

    #[test]
    fn reset_clears_fragment_and_shows_everything() {
        let mut engine = FacetEngine::new(two_boards());
        engine.on_facet_changed(FacetChange::AddTag("spi".into()));
        engine.on_facet_changed(FacetChange::AddCompatible("nordic,*".into()));

        let outcome = engine.on_facet_changed(FacetChange::Reset);
        assert!(outcome.visible.iter().all(|v| *v));
        assert_eq!(outcome.fragment, "");
        assert_eq!(engine.fragment(), "");
        assert!(engine.state().is_default());
    }

    #[test]
    fn suggest_tags_excludes_selected() {
        let mut engine = FacetEngine::new(two_boards());
        assert_eq!(engine.suggest_tags("P"), strings(&["gpio", "spi"]));

        engine.on_facet_changed(FacetChange::AddTag("spi".into()));
        assert_eq!(engine.suggest_tags("p"), strings(&["gpio"]));
        assert!(engine.suggest_tags("can").is_empty());
    }

    #[test]
    fn open_reads_from_store() {
        let source = InMemoryCatalog::new(two_boards());
        let mut engine = FacetEngine::open(&source).unwrap();
        let outcome = engine.refresh();
        assert_eq!(outcome.summary.total_boards, 2);
        assert_eq!(outcome.options.vendors, strings(&["nordic", "st"]));
        assert_eq!(outcome.options.families, strings(&["Nordic", "ST"]));
    }
}
